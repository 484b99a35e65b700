use std::cmp::Ordering;
use std::fmt::Display;

use super::{Scan, Store};
use crate::flight::Flight;

/// In-memory flight store using an unbalanced binary search tree keyed by
/// flight number.
///
/// Every key in a node's left subtree is strictly smaller than the node's
/// key, and every key in its right subtree is greater or equal. Equal keys
/// descend right on insert, so the first-inserted record for a number shadows
/// later ones during lookup while all of them remain visible to scans.
///
/// There is no rebalancing: sorted insertion degrades the tree into a chain,
/// which is why every operation here walks the tree with a loop or an
/// explicit stack instead of recursing.
pub struct Bst {
    /// The tree root, or None when the store is empty.
    root: Option<Box<Node>>,
    /// Number of records inserted, duplicates included.
    len: usize,
}

/// A tree node, exclusively owning its children. Dropping a node drops its
/// whole subtree.
struct Node {
    flight: Flight,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(flight: Flight) -> Self {
        Self { flight, left: None, right: None }
    }
}

impl Bst {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Bst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bst")
    }
}

impl Store for Bst {
    fn insert(&mut self, flight: Flight) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if flight.number < node.flight.number {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(flight)));
        self.len += 1;
    }

    fn get(&self, number: i64) -> Option<Flight> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match number.cmp(&n.flight.number) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return Some(n.flight.clone()),
            };
        }
        None
    }

    fn first(&self) -> Option<Flight> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.flight.clone())
    }

    fn last(&self) -> Option<Flight> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.flight.clone())
    }

    fn scan(&self) -> Scan<'_> {
        Box::new(Iter::new(self.root.as_deref()))
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for Bst {
    /// Dismantles the tree iteratively. Letting the Box chain drop on its own
    /// recurses once per level, which can exhaust the call stack after sorted
    /// insertion has degraded the tree into a long chain.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order iterator over the tree. The stack holds nodes whose own record
/// and right subtree are still pending, so traversal depth lives on the heap
/// rather than the call stack.
struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    /// Pushes a node and its whole left spine onto the stack.
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Flight;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.flight.clone())
    }
}

#[cfg(test)]
use crate::error::Result;

#[cfg(test)]
impl super::TestSuite<Bst> for Bst {
    fn setup() -> Result<Bst> {
        Ok(Bst::new())
    }
}

#[test]
fn tests() -> Result<()> {
    use super::TestSuite;
    Bst::test()
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::super::Store;
    use super::Bst;
    use crate::flight::Flight;

    fn flight(number: i64) -> Flight {
        Flight::new(number, format!("City {}", number), "12:00 PM")
    }

    /// Sorted insertion degrades the tree into a chain. Scans and teardown
    /// must still complete without exhausting the call stack.
    #[test]
    fn sorted_insertion_chain() {
        let mut store = Bst::new();
        for number in 0..10_000 {
            store.insert(flight(number));
        }
        assert_eq!(store.len(), 10_000);
        assert_eq!(store.first().map(|f| f.number), Some(0));
        assert_eq!(store.last().map(|f| f.number), Some(9_999));
        assert_eq!(store.scan().count(), 10_000);
        assert_eq!(store.get(9_999), Some(flight(9_999)));
    }

    /// Scans yield ascending flight numbers regardless of insertion order.
    #[test]
    fn random_insertion_order() {
        let mut numbers: Vec<i64> = (0..500).collect();
        numbers.shuffle(&mut SmallRng::seed_from_u64(0x5eed));

        let mut store = Bst::new();
        for &number in &numbers {
            store.insert(flight(number));
        }

        let scanned: Vec<i64> = store.scan().map(|f| f.number).collect();
        assert_eq!(scanned, (0..500).collect::<Vec<i64>>());
        for number in [0, 123, 499] {
            assert_eq!(store.get(number), Some(flight(number)));
        }
        assert_eq!(store.get(500), None);
    }

    /// The root reference moves from None to the first inserted node.
    #[test]
    fn first_insert_becomes_root() {
        let mut store = Bst::new();
        assert!(store.is_empty());
        store.insert(flight(42));
        assert!(!store.is_empty());
        assert_eq!(store.first(), store.last());
        assert_eq!(store.first().map(|f| f.number), Some(42));
    }
}
