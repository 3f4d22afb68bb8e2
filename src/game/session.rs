//! The game: one explicitly owned engine instance per level being played.
//!
//! `Game` wires the pieces together. An activation runs
//! rules check -> zone move (which updates the topology) -> history record;
//! an undo runs history pop -> reverse zone move. A rejected activation
//! leaves every piece of state untouched.

use serde::Serialize;

use crate::cards::{Card, CardCatalog, CardId, Rank};
use crate::core::action::{ActionKind, ActionRecord};
use crate::core::config::EngineConfig;
use crate::core::error::{LoadError, MoveError};
use crate::history::UndoHistory;
use crate::rules::{AdjacentRankRules, RulesEngine};
use crate::zones::{Zone, ZoneState};

/// Everything a presentation layer needs to draw the current position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Playfield cards ordered by id.
    pub playfield: Vec<Card>,
    /// Stack cards, bottom to top.
    pub stack: Vec<Card>,
    /// Hand cards, bottom to top.
    pub hand: Vec<Card>,
    /// Occluded playfield card ids, sorted.
    pub occluded: Vec<CardId>,
    /// Number of moves that can be undone.
    pub undo_depth: usize,
}

/// A level in play.
///
/// ## Example
///
/// ```
/// use match_solitaire::cards::{CardCatalog, CardId, CardRecord, Position, Rank, Suit};
/// use match_solitaire::core::EngineConfig;
/// use match_solitaire::game::Game;
///
/// let catalog = CardCatalog::new(
///     [CardRecord::new(Rank::Six, Suit::Clubs, Position::new(0.0, 0.0))],
///     [CardRecord::new(Rank::Five, Suit::Hearts, Position::new(0.0, -600.0))],
/// );
///
/// let mut game = Game::new(EngineConfig::default());
/// game.load(&catalog).unwrap();
///
/// game.activate(CardId::new(0)).unwrap();
/// assert!(game.is_cleared());
///
/// game.undo().unwrap();
/// assert!(game.is_in_playfield(CardId::new(0)));
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = AdjacentRankRules> {
    zones: ZoneState,
    history: UndoHistory,
    rules: R,
}

impl Game {
    /// Create an empty game with the standard adjacent-rank rules.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rules(config, AdjacentRankRules)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RulesEngine> Game<R> {
    /// Create an empty game with custom rules.
    #[must_use]
    pub fn with_rules(config: EngineConfig, rules: R) -> Self {
        Self {
            zones: ZoneState::new(config),
            history: UndoHistory::new(),
            rules,
        }
    }

    /// Load a level, discarding the current one and its history.
    ///
    /// On failure no playable level is loaded: the zones are left empty, not
    /// restored to the previous level.
    pub fn load(&mut self, catalog: &CardCatalog) -> Result<(), LoadError> {
        self.history.clear();

        match self.zones.load(catalog) {
            Ok(()) => {
                tracing::info!(
                    cards = catalog.len(),
                    playfield = catalog.playfield().len(),
                    stack = catalog.stack().len(),
                    "level loaded"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "level load failed");
                Err(err)
            }
        }
    }

    /// Would activating `id` be a legal move?
    #[must_use]
    pub fn can_activate(&self, id: CardId) -> bool {
        self.rules.can_activate(&self.zones, id)
    }

    /// Every id that can be activated right now, sorted.
    #[must_use]
    pub fn legal_activations(&self) -> Vec<CardId> {
        self.rules.legal_activations(&self.zones)
    }

    /// Handle a "card activated" event.
    ///
    /// Legal activations move the card onto the hand and are recorded for
    /// undo. Illegal ones change nothing.
    pub fn activate(&mut self, id: CardId) -> Result<ActionRecord, MoveError> {
        if !self.rules.can_activate(&self.zones, id) {
            tracing::debug!(card = %id, "activation rejected");
            return Err(MoveError::Illegal(id));
        }

        let kind = match self.zones.move_to_hand(id)? {
            Zone::Stack => ActionKind::StackClick,
            Zone::Playfield | Zone::Hand => ActionKind::PlayfieldClick,
        };
        let record = ActionRecord::new(kind, id);
        self.history.push(record);

        tracing::debug!(card = %id, %kind, depth = self.history.len(), "activated");
        Ok(record)
    }

    /// Handle an "undo" event.
    ///
    /// Returns `Ok(None)` when there is nothing to undo. The popped record's
    /// card is assumed to still be the hand top, which holds as long as every
    /// move went through [`Game::activate`]. If it does not, the record is
    /// still consumed and the error is returned.
    pub fn undo(&mut self) -> Result<Option<ActionRecord>, MoveError> {
        let Some(record) = self.history.pop() else {
            return Ok(None);
        };

        let reversed = match record.kind {
            ActionKind::PlayfieldClick => self.zones.move_to_playfield(record.card_id),
            ActionKind::StackClick => self.zones.move_to_stack(record.card_id),
        };

        match reversed {
            Ok(()) => {
                tracing::debug!(card = %record.card_id, kind = %record.kind, "undone");
                Ok(Some(record))
            }
            Err(err) => {
                tracing::warn!(%err, kind = %record.kind, "undo record no longer matches the hand");
                Err(err)
            }
        }
    }

    // === Observations ===

    #[must_use]
    pub fn stack_top_id(&self) -> Option<CardId> {
        self.zones.stack_top_id()
    }

    #[must_use]
    pub fn is_in_playfield(&self, id: CardId) -> bool {
        self.zones.is_in_playfield(id)
    }

    #[must_use]
    pub fn is_occluded(&self, id: CardId) -> bool {
        self.zones.is_occluded(id)
    }

    #[must_use]
    pub fn hand_top_rank(&self) -> Option<Rank> {
        self.zones.hand_top_rank()
    }

    #[must_use]
    pub fn hand_top_id(&self) -> Option<CardId> {
        self.zones.hand_top_id()
    }

    /// A level is loaded and every playfield card has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.zones.playfield_len() == 0 && self.zones.hand_top_id().is_some()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneState {
        &self.zones
    }

    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            playfield: self.zones.playfield_cards(),
            stack: self.zones.stack_cards().to_vec(),
            hand: self.zones.hand_cards().to_vec(),
            occluded: self.zones.topology().occluded_ids(),
            undo_depth: self.history.len(),
        }
    }
}
