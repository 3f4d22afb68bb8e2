//! Move validation.
//!
//! `RulesEngine` decides whether activating a card is legal, reading the
//! zone state and occlusion topology but never changing them.

pub mod engine;

pub use engine::{AdjacentRankRules, RulesEngine};
