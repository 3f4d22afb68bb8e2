//! Zone state: the three containers a card can be in, and moves between them.
//!
//! - **Playfield**: unordered, keyed by id, subject to occlusion
//! - **Stack**: LIFO draw pile; only the top is drawable
//! - **Hand**: LIFO; the top is the card every match is compared against
//!
//! Every card of the loaded catalog is in exactly one container. Moves that
//! touch the playfield update the occlusion topology before returning, so
//! callers never observe the two out of sync.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, CardId, Rank};
use crate::core::config::EngineConfig;
use crate::core::error::{LoadError, MoveError};
use crate::topology::OcclusionTopology;

/// Which container a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Playfield,
    Stack,
    Hand,
}

/// Owns the playfield, stack and hand, plus the playfield's occlusion topology.
///
/// ## Usage
///
/// ```
/// use match_solitaire::cards::{CardCatalog, CardId, CardRecord, Position, Rank, Suit};
/// use match_solitaire::core::EngineConfig;
/// use match_solitaire::zones::ZoneState;
///
/// let catalog = CardCatalog::new(
///     [CardRecord::new(Rank::Four, Suit::Clubs, Position::new(0.0, 0.0))],
///     [
///         CardRecord::new(Rank::Nine, Suit::Hearts, Position::new(0.0, -600.0)),
///         CardRecord::new(Rank::Five, Suit::Spades, Position::new(0.0, -600.0)),
///     ],
/// );
///
/// let mut zones = ZoneState::new(EngineConfig::default());
/// zones.load(&catalog).unwrap();
///
/// assert_eq!(zones.stack_top_id(), Some(CardId::new(1)));
/// assert_eq!(zones.hand_top_rank(), Some(Rank::Five));
///
/// zones.move_to_hand(CardId::new(0)).unwrap();
/// assert_eq!(zones.hand_top_rank(), Some(Rank::Four));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneState {
    playfield: FxHashMap<CardId, Card>,

    /// Bottom to top.
    stack: Vec<Card>,

    /// Bottom to top.
    hand: Vec<Card>,

    topology: OcclusionTopology,
}

impl ZoneState {
    /// Create empty zones using the given card geometry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            playfield: FxHashMap::default(),
            stack: Vec::new(),
            hand: Vec::new(),
            topology: OcclusionTopology::new(config),
        }
    }

    /// Empty all three containers and the topology.
    pub fn clear(&mut self) {
        self.playfield.clear();
        self.stack.clear();
        self.hand.clear();
        self.topology.clear();
    }

    /// Seed the zones from a catalog.
    ///
    /// Prior state is cleared first, so on failure the zones are empty rather
    /// than holding the previous level. On success the playfield group goes to
    /// the playfield, the last stack-group card becomes the only hand card and
    /// the rest form the stack bottom-to-top in catalog order.
    pub fn load(&mut self, catalog: &CardCatalog) -> Result<(), LoadError> {
        self.clear();

        let Some((seed, stack)) = catalog.stack().split_last() else {
            return Err(LoadError::EmptyStack);
        };

        self.playfield
            .extend(catalog.playfield().iter().map(|card| (card.id, *card)));
        self.stack.extend_from_slice(stack);
        self.hand.push(*seed);
        self.topology.rebuild(self.playfield.values());

        tracing::debug!(
            playfield = self.playfield.len(),
            stack = self.stack.len(),
            "zones seeded"
        );
        Ok(())
    }

    // === Observations ===

    /// Id of the next drawable stack card.
    #[must_use]
    pub fn stack_top_id(&self) -> Option<CardId> {
        self.stack.last().map(|c| c.id)
    }

    #[must_use]
    pub fn hand_top(&self) -> Option<&Card> {
        self.hand.last()
    }

    #[must_use]
    pub fn hand_top_id(&self) -> Option<CardId> {
        self.hand.last().map(|c| c.id)
    }

    /// Rank every playfield match is compared against.
    #[must_use]
    pub fn hand_top_rank(&self) -> Option<Rank> {
        self.hand.last().map(|c| c.rank)
    }

    #[must_use]
    pub fn is_in_playfield(&self, id: CardId) -> bool {
        self.playfield.contains_key(&id)
    }

    /// Playfield card by id.
    #[must_use]
    pub fn playfield_card(&self, id: CardId) -> Option<&Card> {
        self.playfield.get(&id)
    }

    /// See [`OcclusionTopology::is_occluded`].
    #[must_use]
    pub fn is_occluded(&self, id: CardId) -> bool {
        self.topology.is_occluded(id)
    }

    #[must_use]
    pub fn topology(&self) -> &OcclusionTopology {
        &self.topology
    }

    /// Which container holds a card, if any.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        if self.playfield.contains_key(&id) {
            Some(Zone::Playfield)
        } else if self.stack.iter().any(|c| c.id == id) {
            Some(Zone::Stack)
        } else if self.hand.iter().any(|c| c.id == id) {
            Some(Zone::Hand)
        } else {
            None
        }
    }

    /// Look a card up in whichever container holds it.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.playfield
            .get(&id)
            .or_else(|| self.stack.iter().find(|c| c.id == id))
            .or_else(|| self.hand.iter().find(|c| c.id == id))
    }

    /// Playfield cards ordered by id.
    #[must_use]
    pub fn playfield_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.playfield.values().copied().collect();
        cards.sort_unstable_by_key(|c| c.id);
        cards
    }

    /// Stack cards, bottom to top.
    #[must_use]
    pub fn stack_cards(&self) -> &[Card] {
        &self.stack
    }

    /// Hand cards, bottom to top.
    #[must_use]
    pub fn hand_cards(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn playfield_len(&self) -> usize {
        self.playfield.len()
    }

    /// Total number of cards across all three containers.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.playfield.len() + self.stack.len() + self.hand.len()
    }

    // === Moves ===

    /// Move a card onto the hand.
    ///
    /// Succeeds if `id` is the stack top, or if it is on the playfield (in
    /// which case it also leaves the topology). Returns the source zone.
    pub fn move_to_hand(&mut self, id: CardId) -> Result<Zone, MoveError> {
        if self.stack_top_id() == Some(id) {
            if let Some(card) = self.stack.pop() {
                self.hand.push(card);
                tracing::debug!(card = %id, "stack -> hand");
                return Ok(Zone::Stack);
            }
        }

        let card = self.playfield.remove(&id).ok_or(MoveError::NotDrawable(id))?;
        self.hand.push(card);
        self.topology.remove(id);
        tracing::debug!(card = %id, "playfield -> hand");
        Ok(Zone::Playfield)
    }

    /// Move the hand top back onto the playfield.
    ///
    /// Fails unless `id` is the current hand top.
    pub fn move_to_playfield(&mut self, id: CardId) -> Result<(), MoveError> {
        let card = self.pop_hand_top(id)?;
        self.playfield.insert(id, card);
        self.topology.insert(&card, self.playfield.values());
        tracing::debug!(card = %id, "hand -> playfield");
        Ok(())
    }

    /// Move the hand top back onto the stack.
    ///
    /// Fails unless `id` is the current hand top. The stack is not subject to
    /// occlusion, so the topology is untouched.
    pub fn move_to_stack(&mut self, id: CardId) -> Result<(), MoveError> {
        let card = self.pop_hand_top(id)?;
        self.stack.push(card);
        tracing::debug!(card = %id, "hand -> stack");
        Ok(())
    }

    fn pop_hand_top(&mut self, id: CardId) -> Result<Card, MoveError> {
        if self.hand_top_id() != Some(id) {
            return Err(MoveError::NotHandTop(id));
        }
        self.hand.pop().ok_or(MoveError::NotHandTop(id))
    }
}
