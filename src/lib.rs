//! Zab: a puzzle built on an immutable state and a catalogue of named functions.
//!
//! A Zab has a name, a color ("bim") and an integer ("pim"). Named functions
//! such as `fin`, `mox` or `rox` turn one Zab into the next, and every call
//! is written to an append-only history. Players have to work out what each
//! function does from that history alone.
//!
//! # Core Concepts
//!
//! - **Zab**: the immutable state, see [`core::Zab`]
//! - **Registry**: the name → function catalogue that performs dispatch and
//!   records history, see [`registry::Registry`]
//! - **Oracle**: an injected text capability some functions consult for
//!   real-world facts, see [`oracle::TextOracle`]
//! - **Session**: a turn-limited game over a random subset of functions
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zab::core::{initial_state, Arg};
//! use zab::oracle::FailingOracle;
//! use zab::registry::Registry;
//!
//! let registry = Registry::standard(Arc::new(FailingOracle));
//!
//! let zab = initial_state(10);
//! let zab = zab.call(&registry, "fin", &[]).unwrap();
//! let zab = zab.call(&registry, "tox", &[]).unwrap();
//! let zab = zab.call(&registry, "mox", &[Arg::Int(3)]).unwrap();
//!
//! assert_eq!(zab.describe(), "You are a zab named amaC with bim Yellow and pim 2.");
//! assert_eq!(zab.history().len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod functions;
pub mod oracle;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use builder::ZabBuilder;
pub use core::{initial_state, Arg, History, HistoryEntry, Zab, ZabError};
pub use oracle::TextOracle;
pub use registry::Registry;
pub use session::{GameConfig, Session};
