//! Card definitions - the immutable facts about one card in a level.
//!
//! A `Card` never changes after the catalog creates it. Which zone it sits in
//! and whether it is occluded are tracked elsewhere.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one level.
///
/// Ids are assigned by the catalog as a single counter across the playfield
/// and stack groups. A larger id means the card was dealt later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face value, Ace lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Convert from the 0-based index (Ace = 0, King = 12).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Exactly one rank apart. King and Ace are not adjacent.
    ///
    /// ```
    /// use match_solitaire::cards::Rank;
    ///
    /// assert!(Rank::Five.is_adjacent(Rank::Six));
    /// assert!(Rank::Five.is_adjacent(Rank::Four));
    /// assert!(!Rank::Five.is_adjacent(Rank::Five));
    /// assert!(!Rank::King.is_adjacent(Rank::Ace));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Rank) -> bool {
        (self as i8 - other as i8).abs() == 1
    }
}

/// Card suit. Suits never affect legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Static card data.
///
/// ```
/// use match_solitaire::cards::{Card, CardId, Position, Rank, Suit};
///
/// let card = Card::new(CardId::new(0), Rank::Queen, Suit::Hearts, Position::new(250.0, 1000.0));
/// assert_eq!(card.rank.index(), 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,

    /// Initial position; only used for occlusion geometry.
    pub position: Position,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit, position: Position) -> Self {
        Self {
            id,
            rank,
            suit,
            position,
        }
    }
}
