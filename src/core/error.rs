//! Error types.
//!
//! Every failure in the engine is locally recoverable and reported through a
//! return value. None of these leave state partially mutated.

use thiserror::Error;

use crate::cards::CardId;

/// Why a level could not be loaded into the zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The stack group is empty, so there is no card to seed the hand.
    #[error("level has no stack cards to seed the hand")]
    EmptyStack,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The card is neither the stack top nor on the playfield.
    #[error("{0} is neither the stack top nor on the playfield")]
    NotDrawable(CardId),

    /// The card is not the current hand top.
    #[error("{0} is not the hand top")]
    NotHandTop(CardId),

    /// The rules reject activating the card.
    #[error("{0} cannot be activated")]
    Illegal(CardId),
}

impl MoveError {
    /// The card the refused move was about.
    #[must_use]
    pub const fn card_id(self) -> CardId {
        match self {
            MoveError::NotDrawable(id) | MoveError::NotHandTop(id) | MoveError::Illegal(id) => id,
        }
    }
}
