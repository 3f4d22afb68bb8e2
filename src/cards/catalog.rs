//! Card catalog: every card of one level, split into its two deal groups.
//!
//! The catalog is built once per level from loader-supplied records and is
//! read-only afterwards. Ids are assigned as a single counter across both
//! groups: playfield records first, then stack records, each in input order.
//! That makes ids dense, so lookup is a slice index.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, Position, Rank, Suit};

/// A card as it comes from a level, before an id is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub rank: Rank,
    pub suit: Suit,
    pub position: Position,
}

impl CardRecord {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, position: Position) -> Self {
        Self {
            rank,
            suit,
            position,
        }
    }
}

/// Immutable per-level record of every card.
///
/// ## Example
///
/// ```
/// use match_solitaire::cards::{CardCatalog, CardId, CardRecord, Position, Rank, Suit};
///
/// let catalog = CardCatalog::new(
///     [CardRecord::new(Rank::Ace, Suit::Clubs, Position::new(0.0, 0.0))],
///     [CardRecord::new(Rank::Five, Suit::Hearts, Position::new(0.0, -500.0))],
/// );
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.stack()[0].id, CardId::new(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CardCatalog {
    /// All cards, indexed by id.
    cards: Vec<Card>,

    /// Number of leading cards that belong to the playfield group.
    playfield_len: usize,
}

impl CardCatalog {
    /// Build a catalog, assigning ids playfield-first.
    #[must_use]
    pub fn new(
        playfield: impl IntoIterator<Item = CardRecord>,
        stack: impl IntoIterator<Item = CardRecord>,
    ) -> Self {
        let playfield: Vec<CardRecord> = playfield.into_iter().collect();
        let playfield_len = playfield.len();

        let cards = playfield
            .into_iter()
            .chain(stack)
            .enumerate()
            .map(|(index, record)| {
                Card::new(
                    CardId::new(index as u32),
                    record.rank,
                    record.suit,
                    record.position,
                )
            })
            .collect();

        Self {
            cards,
            playfield_len,
        }
    }

    /// Cards dealt onto the playfield, in id order.
    #[must_use]
    pub fn playfield(&self) -> &[Card] {
        &self.cards[..self.playfield_len]
    }

    /// Cards in the stack group, in id order.
    ///
    /// The last one seeds the hand; the rest form the stack bottom-to-top.
    #[must_use]
    pub fn stack(&self) -> &[Card] {
        &self.cards[self.playfield_len..]
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    /// Check if a card ID belongs to this catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        (id.raw() as usize) < self.cards.len()
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over all card IDs in id order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }
}
