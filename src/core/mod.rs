//! Core engine types: configuration, action records, errors.

pub mod action;
pub mod config;
pub mod error;

pub use action::{ActionKind, ActionRecord};
pub use config::{Anchor, EngineConfig, Size};
pub use error::{LoadError, MoveError};
