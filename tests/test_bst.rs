use flightdb::flight::Flight;
use flightdb::storage::{Bst, Store};

fn demo_store() -> Bst {
    let mut store = Bst::new();
    store.insert(Flight::new(101, "New York", "08:00 AM"));
    store.insert(Flight::new(202, "Los Angeles", "10:30 AM"));
    store.insert(Flight::new(303, "Chicago", "12:45 PM"));
    store
}

#[test]
fn test_demo_flights() {
    let store = demo_store();

    let flight = store.get(202).expect("flight 202 should exist");
    assert_eq!(flight.destination, "Los Angeles");
    assert_eq!(flight.departure, "10:30 AM");

    assert_eq!(store.first().map(|f| f.number), Some(101));
    assert_eq!(store.last().map(|f| f.number), Some(303));

    let numbers: Vec<i64> = store.scan().map(|f| f.number).collect();
    assert_eq!(numbers, vec![101, 202, 303]);
}

#[test]
fn test_empty_store() {
    let store = Bst::new();

    assert_eq!(store.get(1), None);
    assert_eq!(store.first(), None);
    assert_eq!(store.last(), None);
    assert_eq!(store.scan().count(), 0);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_duplicate_numbers() {
    let mut store = demo_store();
    store.insert(Flight::new(50, "Denver", "09:00 AM"));
    store.insert(Flight::new(50, "Boston", "11:00 AM"));

    // The first-inserted record for a number wins lookups; both stay visible
    // to scans, in insertion order.
    assert_eq!(store.get(50).map(|f| f.destination), Some("Denver".to_string()));
    let fifties: Vec<String> =
        store.scan().filter(|f| f.number == 50).map(|f| f.destination).collect();
    assert_eq!(fifties, vec!["Denver".to_string(), "Boston".to_string()]);

    assert_eq!(store.len(), 5);
    assert_eq!(store.first().map(|f| f.number), Some(50));
}

#[test]
fn test_scan_is_repeatable() {
    let store = demo_store();

    let once: Vec<Flight> = store.scan().collect();
    let twice: Vec<Flight> = store.scan().collect();
    assert_eq!(once, twice);
}
