//! Level file loading.
//!
//! Turns the JSON level format into a `CardCatalog`. This sits outside the
//! rules engine; the engine only ever sees the catalog.

pub mod config;

pub use config::{catalog_from_json, Group, LevelConfig, LevelError, RawCard, RawPosition};
