use std::fmt::{self, Display};

use serde_derive::{Deserialize, Serialize};

/// A single flight record. Immutable once created; the store hands out owned
/// copies rather than references into its internal nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// The flight number, used as the lookup key. Uniqueness is not enforced
    /// by the store; see `storage::Bst` for the duplicate behavior.
    pub number: i64,
    /// Destination city.
    pub destination: String,
    /// Departure time, as free text.
    pub departure: String,
}

impl Flight {
    /// Creates a new flight record.
    pub fn new(number: i64, destination: impl Into<String>, departure: impl Into<String>) -> Self {
        Self { number, destination: destination.into(), departure: departure.into() }
    }
}

impl Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flight {} to {}, departing at {}", self.number, self.destination, self.departure)
    }
}

#[cfg(test)]
mod tests {
    use super::Flight;

    #[test]
    fn display() {
        let flight = Flight::new(101, "New York", "08:00 AM");
        assert_eq!(flight.to_string(), "Flight 101 to New York, departing at 08:00 AM");
    }
}
