//! Core library for `practice` — a practice session log.
//!
//! Provides validated session records, the flat-file session store, and
//! practice time totals.

pub mod config;
pub mod error;
pub mod session;
pub mod stats;
pub mod store;

pub use error::PracticeError;
pub use session::Session;
pub use stats::PracticeTotal;
pub use store::{SessionStore, SkippedLine};
