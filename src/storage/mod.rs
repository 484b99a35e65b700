pub mod bst;

use std::fmt::Display;

use crate::flight::Flight;

pub use bst::Bst;

/// A flight record store.
pub trait Store: Display + Send + Sync {
    /// Inserts a flight record. Duplicate flight numbers are allowed: the new
    /// record lands in the right subtree of the existing one, so lookups keep
    /// returning the first-inserted record for that number while scans show
    /// every record.
    fn insert(&mut self, flight: Flight);

    /// Gets the flight with the given number, if it exists. With duplicate
    /// numbers, returns the first-inserted match.
    fn get(&self, number: i64) -> Option<Flight>;

    /// Returns the flight with the smallest number, if the store is non-empty.
    fn first(&self) -> Option<Flight>;

    /// Returns the flight with the largest number, if the store is non-empty.
    fn last(&self) -> Option<Flight>;

    /// Iterates over all flights in ascending flight-number order.
    fn scan(&self) -> Scan<'_>;

    /// The number of records in the store, duplicates included.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator over an ordered sequence of flights.
pub type Scan<'a> = Box<dyn Iterator<Item = Flight> + 'a>;

#[cfg(test)]
use crate::error::Result;

/// Generic tests for Store implementations.
#[cfg(test)]
pub trait TestSuite<S: Store> {
    fn setup() -> Result<S>;

    fn test() -> Result<()> {
        Self::test_get()?;
        Self::test_first_last()?;
        Self::test_scan()?;
        Self::test_duplicates()?;
        Self::test_empty()?;
        Ok(())
    }

    fn test_get() -> Result<()> {
        let mut s = Self::setup()?;
        s.insert(Flight::new(101, "New York", "08:00 AM"));
        s.insert(Flight::new(202, "Los Angeles", "10:30 AM"));
        s.insert(Flight::new(303, "Chicago", "12:45 PM"));
        assert_eq!(s.get(202), Some(Flight::new(202, "Los Angeles", "10:30 AM")));
        assert_eq!(s.get(404), None);
        Ok(())
    }

    fn test_first_last() -> Result<()> {
        let mut s = Self::setup()?;
        s.insert(Flight::new(202, "Los Angeles", "10:30 AM"));
        s.insert(Flight::new(101, "New York", "08:00 AM"));
        s.insert(Flight::new(303, "Chicago", "12:45 PM"));
        assert_eq!(s.first().map(|f| f.number), Some(101));
        assert_eq!(s.last().map(|f| f.number), Some(303));
        Ok(())
    }

    fn test_scan() -> Result<()> {
        let mut s = Self::setup()?;
        for number in [303, 101, 202] {
            s.insert(Flight::new(number, "Somewhere", "12:00 PM"));
        }
        let numbers: Vec<i64> = s.scan().map(|f| f.number).collect();
        assert_eq!(numbers, vec![101, 202, 303]);
        assert_eq!(s.len(), 3);
        // A second scan with no intervening insert yields the same sequence.
        let again: Vec<i64> = s.scan().map(|f| f.number).collect();
        assert_eq!(numbers, again);
        Ok(())
    }

    fn test_duplicates() -> Result<()> {
        let mut s = Self::setup()?;
        s.insert(Flight::new(50, "Denver", "09:00 AM"));
        s.insert(Flight::new(50, "Boston", "11:00 AM"));
        // Lookup finds the first-inserted record; both stay scan-visible, in
        // insertion order.
        assert_eq!(s.get(50), Some(Flight::new(50, "Denver", "09:00 AM")));
        let cities: Vec<String> = s.scan().map(|f| f.destination).collect();
        assert_eq!(cities, vec!["Denver".to_string(), "Boston".to_string()]);
        assert_eq!(s.len(), 2);
        Ok(())
    }

    fn test_empty() -> Result<()> {
        let s = Self::setup()?;
        assert_eq!(s.get(1), None);
        assert_eq!(s.first(), None);
        assert_eq!(s.last(), None);
        assert_eq!(s.scan().count(), 0);
        assert!(s.is_empty());
        Ok(())
    }
}
