//! Card data: definitions and the per-level catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Dense per-level identifier; larger ids were dealt later
//! - `Rank`, `Suit`: Face value and suit
//! - `Card`: Immutable card record with its layout position
//! - `CardRecord`: Loader input before id assignment
//! - `CardCatalog`: Every card of a level, split into playfield and stack groups

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, CardRecord};
pub use definition::{Card, CardId, Position, Rank, Suit};
