//! Builder API for starting states.
//!
//! Games start from the default Zab; the builder lets a driver pick a
//! different starting name, bim, or pim while keeping the state invariants.

pub mod state;

pub use state::{StateViolation, ZabBuilder};
