//! Core Zab types.
//!
//! This module contains the pure functional core of the game:
//! - The immutable `Zab` state
//! - Positional arguments and argument guards
//! - Immutable history tracking
//!
//! Nothing here performs I/O.

mod arg;
mod error;
mod guard;
mod history;
mod state;

pub(crate) use arg::expect_arity;
pub use arg::Arg;
pub use error::ZabError;
pub use guard::Guard;
pub use history::{render_call, History, HistoryEntry};
pub use state::{initial_state, Zab, DEFAULT_BIM, DEFAULT_NAME, DEFAULT_PIM};
