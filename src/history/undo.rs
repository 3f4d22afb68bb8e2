//! Undo history: a stack of the moves made since the level was loaded.
//!
//! Records are pushed only after a move has succeeded and popped by exactly
//! one undo each. There is no redo and no branching; the history is strictly
//! LIFO.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::action::{ActionKind, ActionRecord};

/// Stack of reversible moves, most recent last.
///
/// Backed by a persistent vector so cloning a game for look-ahead is cheap.
///
/// ```
/// use match_solitaire::cards::CardId;
/// use match_solitaire::core::ActionKind;
/// use match_solitaire::history::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record(ActionKind::StackClick, CardId::new(4));
/// history.record(ActionKind::PlayfieldClick, CardId::new(1));
///
/// assert_eq!(history.pop().map(|r| r.card_id), Some(CardId::new(1)));
/// assert_eq!(history.pop().map(|r| r.card_id), Some(CardId::new(4)));
/// assert!(history.pop().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    records: Vector<ActionRecord>,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a record for a move that has already succeeded.
    pub fn record(&mut self, kind: ActionKind, card_id: CardId) {
        self.push(ActionRecord::new(kind, card_id));
    }

    pub fn push(&mut self, record: ActionRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the most recent record; `None` when empty.
    pub fn pop(&mut self) -> Option<ActionRecord> {
        self.records.pop_back()
    }

    /// The record the next `pop` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&ActionRecord> {
        self.records.back()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter()
    }
}
