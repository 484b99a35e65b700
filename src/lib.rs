pub mod error;
pub mod flight;
pub mod storage;

pub use flight::Flight;
pub use storage::{Bst, Store};
