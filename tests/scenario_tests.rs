//! Gameplay scenario tests.
//!
//! These tests drive `Game` through the same events a UI would deliver:
//! card activations and undo presses.

use match_solitaire::cards::{CardCatalog, CardId, CardRecord, Position, Rank, Suit};
use match_solitaire::core::{ActionKind, EngineConfig, LoadError, MoveError};
use match_solitaire::game::Game;
use match_solitaire::rules::{AdjacentRankRules, RulesEngine};

fn card(rank: Rank, x: f32, y: f32) -> CardRecord {
    CardRecord::new(rank, Suit::Spades, Position::new(x, y))
}

fn loaded(playfield: Vec<CardRecord>, stack: Vec<CardRecord>) -> Game {
    let mut game = Game::new(EngineConfig::default());
    game.load(&CardCatalog::new(playfield, stack)).unwrap();
    game
}

// =============================================================================
// Occlusion
// =============================================================================

/// An Ace covered by a Two, with a lone Six as hand: nothing on the playfield is playable.
#[test]
fn test_covered_ace_and_unmatched_two() {
    let game = loaded(
        vec![card(Rank::Ace, 0.0, 0.0), card(Rank::Two, 20.0, 20.0)],
        vec![card(Rank::Six, 0.0, -1000.0)],
    );

    assert!(game.is_occluded(CardId(0)));
    assert!(!game.is_occluded(CardId(1)));
    assert!(!game.can_activate(CardId(0)));
    assert!(!game.can_activate(CardId(1)));
    assert_eq!(game.stack_top_id(), None);
    assert_eq!(game.hand_top_id(), Some(CardId(2)));
}

/// Removing the top card uncovers the card beneath it.
#[test]
fn test_matching_top_card_uncovers_lower() {
    let mut game = loaded(
        vec![card(Rank::Three, 0.0, 0.0), card(Rank::Five, 30.0, 30.0)],
        vec![card(Rank::Four, 0.0, -1000.0)],
    );
    assert!(!game.can_activate(CardId(0)));

    game.activate(CardId(1)).unwrap();

    assert!(!game.is_occluded(CardId(0)));
    // Hand top is now Five, Three is two away.
    assert!(!game.can_activate(CardId(0)));
}

/// A card covered by two others stays blocked until both are gone.
#[test]
fn test_double_cover_needs_both_removed() {
    let mut game = loaded(
        vec![
            card(Rank::Nine, 0.0, 0.0),
            card(Rank::Six, -100.0, 100.0),
            card(Rank::Seven, 100.0, 100.0),
        ],
        vec![card(Rank::Five, 0.0, -1000.0)],
    );
    assert_eq!(game.zones().topology().occluded_by_count(CardId(0)), 2);

    game.activate(CardId(1)).unwrap(); // Six onto Five
    assert!(game.is_occluded(CardId(0)));

    game.activate(CardId(2)).unwrap(); // Seven onto Six
    assert!(!game.is_occluded(CardId(0)));
}

// =============================================================================
// Rank adjacency
// =============================================================================

/// Hand Five: Four and Six are playable, Three is not.
#[test]
fn test_both_neighbours_playable() {
    let game = loaded(
        vec![
            card(Rank::Four, 0.0, 0.0),
            card(Rank::Six, 500.0, 0.0),
            card(Rank::Three, 1000.0, 0.0),
        ],
        vec![card(Rank::Five, 0.0, -1000.0)],
    );

    assert!(game.can_activate(CardId(0)));
    assert!(game.can_activate(CardId(1)));
    assert!(!game.can_activate(CardId(2)));
}

/// King and Ace never match in either direction.
#[test]
fn test_no_king_ace_wraparound() {
    let ace_on_king = loaded(
        vec![card(Rank::Ace, 0.0, 0.0)],
        vec![card(Rank::King, 0.0, -1000.0)],
    );
    assert!(!ace_on_king.can_activate(CardId(0)));

    let king_on_ace = loaded(
        vec![card(Rank::King, 0.0, 0.0)],
        vec![card(Rank::Ace, 0.0, -1000.0)],
    );
    assert!(!king_on_ace.can_activate(CardId(0)));
}

/// Matching a run up and back down again.
#[test]
fn test_run_up_and_down() {
    let mut game = loaded(
        vec![
            card(Rank::Six, 0.0, 0.0),
            card(Rank::Seven, 500.0, 0.0),
            card(Rank::Six, 1000.0, 0.0),
        ],
        vec![card(Rank::Five, 0.0, -1000.0)],
    );

    game.activate(CardId(0)).unwrap();
    game.activate(CardId(1)).unwrap();
    game.activate(CardId(2)).unwrap();

    assert!(game.is_cleared());
    assert_eq!(game.hand_top_rank(), Some(Rank::Six));
    assert_eq!(game.zones().hand_cards().len(), 4);
}

// =============================================================================
// Stack
// =============================================================================

/// The stack top is always playable, regardless of rank or overlap.
#[test]
fn test_stack_top_always_playable() {
    let mut game = loaded(
        vec![card(Rank::Ace, 0.0, 0.0)],
        vec![
            card(Rank::King, 0.0, 0.0),
            card(Rank::Queen, 0.0, 0.0),
            card(Rank::Ace, 0.0, 0.0),
        ],
    );

    assert_eq!(game.stack_top_id(), Some(CardId(2)));
    let record = game.activate(CardId(2)).unwrap();
    assert_eq!(record.kind, ActionKind::StackClick);

    // Old hand top remains underneath.
    let hand: Vec<_> = game.zones().hand_cards().iter().map(|c| c.id).collect();
    assert_eq!(hand, vec![CardId(3), CardId(2)]);

    assert_eq!(game.stack_top_id(), Some(CardId(1)));
    game.activate(CardId(1)).unwrap();
    assert_eq!(game.stack_top_id(), None);
}

/// Only the stack top can be drawn.
#[test]
fn test_buried_stack_card_unplayable() {
    let mut game = loaded(
        Vec::new(),
        vec![
            card(Rank::Two, 0.0, 0.0),
            card(Rank::Three, 0.0, 0.0),
            card(Rank::Four, 0.0, 0.0),
        ],
    );

    assert_eq!(game.activate(CardId(0)), Err(MoveError::Illegal(CardId(0))));
}

// =============================================================================
// Undo
// =============================================================================

/// Undo restores the exact position, topology included.
#[test]
fn test_undo_round_trip() {
    let mut game = loaded(
        vec![
            card(Rank::Three, 0.0, 0.0),
            card(Rank::Five, 30.0, 30.0),
            card(Rank::Six, 60.0, 60.0),
        ],
        vec![card(Rank::Nine, 0.0, -1000.0), card(Rank::Four, 0.0, -1000.0)],
    );
    let before = game.snapshot();
    let topology = game.zones().topology().clone();

    game.activate(CardId(2)).unwrap_err(); // Six vs Four: illegal
    game.activate(CardId(1)).unwrap_err(); // Five covered by Six
    game.activate(CardId(3)).unwrap(); // draw Nine
    game.undo().unwrap();

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.zones().topology(), &topology);
}

/// Undo walks back through mixed moves in reverse order.
#[test]
fn test_undo_reverse_order() {
    let mut game = loaded(
        vec![card(Rank::Ten, 0.0, 0.0), card(Rank::Jack, 20.0, 0.0)],
        vec![card(Rank::Queen, 0.0, -1000.0), card(Rank::Two, 0.0, -1000.0)],
    );

    game.activate(CardId(2)).unwrap(); // draw Queen
    game.activate(CardId(1)).unwrap(); // Jack onto Queen
    game.activate(CardId(0)).unwrap(); // Ten onto Jack
    assert!(game.is_cleared());

    let kinds: Vec<_> = std::iter::from_fn(|| game.undo().unwrap())
        .map(|r| (r.kind, r.card_id))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ActionKind::PlayfieldClick, CardId(0)),
            (ActionKind::PlayfieldClick, CardId(1)),
            (ActionKind::StackClick, CardId(2)),
        ]
    );

    assert!(game.is_occluded(CardId(0)));
    assert_eq!(game.stack_top_id(), Some(CardId(2)));
    assert_eq!(game.hand_top_id(), Some(CardId(3)));
}

/// Undo with no history does nothing.
#[test]
fn test_undo_empty_history() {
    let mut game = loaded(Vec::new(), vec![card(Rank::Two, 0.0, 0.0)]);
    assert_eq!(game.undo(), Ok(None));
    assert_eq!(game.hand_top_id(), Some(CardId(0)));
}

// =============================================================================
// Loading
// =============================================================================

/// A level without stack cards cannot be played.
#[test]
fn test_load_without_stack_fails() {
    let mut game = Game::default();
    let catalog = CardCatalog::new(vec![card(Rank::Ace, 0.0, 0.0)], Vec::new());

    assert_eq!(game.load(&catalog), Err(LoadError::EmptyStack));
    assert!(!game.can_activate(CardId(0)));
    assert!(game.legal_activations().is_empty());
}

/// Custom geometry changes what overlaps.
#[test]
fn test_card_size_drives_overlap() {
    let catalog = CardCatalog::new(
        vec![card(Rank::Four, 0.0, 0.0), card(Rank::Eight, 50.0, 0.0)],
        vec![card(Rank::Five, 0.0, -1000.0)],
    );

    let mut wide = Game::new(EngineConfig::default());
    wide.load(&catalog).unwrap();
    assert!(wide.is_occluded(CardId(0)));

    let mut narrow = Game::new(EngineConfig::default().with_card_size(40.0, 40.0));
    narrow.load(&catalog).unwrap();
    assert!(!narrow.is_occluded(CardId(0)));
    assert!(narrow.can_activate(CardId(0)));
}

/// The rules can be queried directly against zone state.
#[test]
fn test_rules_against_zone_state() {
    let game = loaded(
        vec![card(Rank::Two, 0.0, 0.0)],
        vec![card(Rank::Jack, 0.0, -1000.0), card(Rank::Three, 0.0, -1000.0)],
    );

    assert_eq!(
        AdjacentRankRules.legal_activations(game.zones()),
        vec![CardId(0), CardId(1)]
    );
}
