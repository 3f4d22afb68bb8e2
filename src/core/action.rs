//! Action records: what a successful move did, kept so it can be reversed.
//!
//! A move is identified by the card that was activated plus the zone it was
//! drawn from. The zone is classified by the engine at activation time, so
//! callers only ever deliver a plain card id.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Which source zone an activated card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A playfield card was matched onto the hand.
    PlayfieldClick,
    /// The stack top was drawn onto the hand.
    StackClick,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::PlayfieldClick => write!(f, "playfield"),
            ActionKind::StackClick => write!(f, "stack"),
        }
    }
}

/// A recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Source zone of the move.
    pub kind: ActionKind,

    /// The card that moved onto the hand.
    pub card_id: CardId,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(kind: ActionKind, card_id: CardId) -> Self {
        Self { kind, card_id }
    }

    #[must_use]
    pub const fn playfield(card_id: CardId) -> Self {
        Self::new(ActionKind::PlayfieldClick, card_id)
    }

    #[must_use]
    pub const fn stack(card_id: CardId) -> Self {
        Self::new(ActionKind::StackClick, card_id)
    }
}
