//! Engine configuration.
//!
//! The only tunable the rules depend on is card geometry: every card shares
//! one size and one anchor, and the occlusion topology derives each card's
//! bounding box from its position plus these two values.

use serde::{Deserialize, Serialize};

/// Width and height of a card, in layout units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Anchor as a fraction of the card size.
///
/// `(0.5, 0.5)` means a card's position is its center; `(0.0, 0.0)` means
/// the position is its bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position is the center of the card.
    pub const CENTER: Anchor = Anchor::new(0.5, 0.5);

    /// Position is the bottom-left corner of the card.
    pub const BOTTOM_LEFT: Anchor = Anchor::new(0.0, 0.0);
}

/// Engine configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shared card size (default: 182 x 282).
    pub card_size: Size,

    /// Shared card anchor (default: center).
    pub anchor: Anchor,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            card_size: Size::new(182.0, 282.0),
            anchor: Anchor::CENTER,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom card size.
    #[must_use]
    pub fn with_card_size(mut self, width: f32, height: f32) -> Self {
        self.card_size = Size::new(width, height);
        self
    }

    /// Create a new config with a custom anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}
