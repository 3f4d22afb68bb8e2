//! Zone system for card locations.
//!
//! A level has exactly three zones: the playfield, the stack and the hand.
//! `ZoneState` owns all three and keeps the playfield's occlusion topology in
//! step with every move.

pub mod state;

pub use state::{Zone, ZoneState};
