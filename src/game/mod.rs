//! Orchestration of a level in play.
//!
//! `Game` owns the zones, the undo history and the rules, and turns raw
//! "card activated" / "undo" events into engine calls.

pub mod session;

pub use session::{Game, Snapshot};
