//! Axis-aligned bounding boxes for playfield cards.

use serde::{Deserialize, Serialize};

use crate::cards::Position;
use crate::core::config::EngineConfig;

/// Axis-aligned bounding box, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    /// Box of a card placed at `position` under the shared size and anchor.
    ///
    /// ```
    /// use match_solitaire::cards::Position;
    /// use match_solitaire::core::EngineConfig;
    /// use match_solitaire::topology::Aabb;
    ///
    /// let config = EngineConfig::default().with_card_size(100.0, 200.0);
    /// let aabb = Aabb::of_card(Position::new(0.0, 0.0), &config);
    /// assert_eq!((aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y), (-50.0, -100.0, 50.0, 100.0));
    /// ```
    #[must_use]
    pub fn of_card(position: Position, config: &EngineConfig) -> Self {
        let size = config.card_size;
        let min_x = position.x - config.anchor.x * size.width;
        let min_y = position.y - config.anchor.y * size.height;

        Self {
            min_x,
            min_y,
            max_x: min_x + size.width,
            max_y: min_y + size.height,
        }
    }

    /// Boxes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }
}
