//! Level files.
//!
//! A level is a JSON object with two arrays, dealt in file order:
//!
//! ```json
//! {
//!   "Playfield": [{ "CardFace": 12, "CardSuit": 0, "Position": { "x": 250, "y": 1000 } }],
//!   "Stack":     [{ "CardFace": 2,  "CardSuit": 0, "Position": { "x": 0,   "y": 0 } }]
//! }
//! ```
//!
//! `CardFace` is 0 (Ace) through 12 (King); `CardSuit` is 0 (Clubs) through
//! 3 (Spades). Either array may be empty here; an empty stack is rejected
//! later, when the catalog is loaded into the zones.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardCatalog, CardRecord, Position, Rank, Suit};

/// Which array of the level file a card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    Playfield,
    Stack,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Playfield => write!(f, "Playfield"),
            Group::Stack => write!(f, "Stack"),
        }
    }
}

/// Why a level file could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{group}[{index}]: card face {value} out of range 0..=12")]
    InvalidRank { group: Group, index: usize, value: i64 },

    #[error("{group}[{index}]: card suit {value} out of range 0..=3")]
    InvalidSuit { group: Group, index: usize, value: i64 },
}

/// Position as written in level files (integers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPosition {
    pub x: i32,
    pub y: i32,
}

/// One card entry as written in a level file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(rename = "CardFace")]
    pub face: i64,

    #[serde(rename = "CardSuit")]
    pub suit: i64,

    #[serde(rename = "Position")]
    pub position: RawPosition,
}

impl RawCard {
    fn to_record(self, group: Group, index: usize) -> Result<CardRecord, LevelError> {
        let rank = u8::try_from(self.face)
            .ok()
            .and_then(Rank::from_index)
            .ok_or(LevelError::InvalidRank {
                group,
                index,
                value: self.face,
            })?;
        let suit = u8::try_from(self.suit)
            .ok()
            .and_then(Suit::from_index)
            .ok_or(LevelError::InvalidSuit {
                group,
                index,
                value: self.suit,
            })?;
        let position = Position::new(self.position.x as f32, self.position.y as f32);

        Ok(CardRecord::new(rank, suit, position))
    }
}

/// A parsed, not yet validated, level file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(rename = "Playfield")]
    pub playfield: Vec<RawCard>,

    #[serde(rename = "Stack")]
    pub stack: Vec<RawCard>,
}

impl LevelConfig {
    /// Parse a level from JSON text. Both arrays are required.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a level file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            tracing::warn!(path = %path.display(), %err, "failed to read level file");
            err
        })?;
        Self::from_json_str(&text)
    }

    /// Validate every card and assign ids.
    pub fn into_catalog(self) -> Result<CardCatalog, LevelError> {
        let playfield = Self::records(&self.playfield, Group::Playfield)?;
        let stack = Self::records(&self.stack, Group::Stack)?;

        tracing::debug!(
            playfield = playfield.len(),
            stack = stack.len(),
            "level parsed"
        );
        Ok(CardCatalog::new(playfield, stack))
    }

    fn records(cards: &[RawCard], group: Group) -> Result<Vec<CardRecord>, LevelError> {
        cards
            .iter()
            .enumerate()
            .map(|(index, card)| card.to_record(group, index))
            .collect()
    }
}

/// Parse and validate a level in one step.
pub fn catalog_from_json(json: &str) -> Result<CardCatalog, LevelError> {
    LevelConfig::from_json_str(json)?.into_catalog()
}
