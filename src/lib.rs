//! # match-solitaire
//!
//! Rules engine for a single-player card-matching solitaire.
//!
//! Cards sit in one of three zones. Playfield cards can block one another
//! physically; an unblocked playfield card can be moved onto the hand when
//! its rank is exactly one away from the hand top's. The stack top can always
//! be drawn onto the hand. Every move can be undone in reverse order.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: One `Game` value per level in play, constructed
//!    and passed around by the caller. No global state.
//!
//! 2. **Incremental Topology**: Occlusion is computed in full once per level
//!    load, then patched per move in O(n) or better.
//!
//! 3. **Return Values, Not Panics**: Every refusal is a `Result` the caller
//!    can ignore or act on; state is never partially mutated.
//!
//! ## Modules
//!
//! - `core`: Configuration, action records, errors
//! - `cards`: Card data and the per-level catalog
//! - `zones`: Playfield / stack / hand containers and moves
//! - `topology`: Occlusion graph over playfield cards
//! - `rules`: Move legality
//! - `history`: Undo stack
//! - `game`: Orchestration of activate / undo events
//! - `level`: JSON level files to catalogs

pub mod cards;
pub mod core;
pub mod game;
pub mod history;
pub mod level;
pub mod rules;
pub mod topology;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{ActionKind, ActionRecord, Anchor, EngineConfig, LoadError, MoveError, Size};

pub use crate::cards::{Card, CardCatalog, CardId, CardRecord, Position, Rank, Suit};

pub use crate::zones::{Zone, ZoneState};

pub use crate::topology::{Aabb, CoverEntry, OcclusionTopology};

pub use crate::rules::{AdjacentRankRules, RulesEngine};

pub use crate::history::UndoHistory;

pub use crate::game::{Game, Snapshot};

pub use crate::level::{LevelConfig, LevelError};
