//! Move legality.
//!
//! A card may be activated when it is the stack top, or when it is an
//! unoccluded playfield card whose rank passes the game's match test against
//! the hand top. Only the match test varies between rule sets.

use crate::cards::{CardId, Rank};
use crate::zones::ZoneState;

/// Rules engine trait.
///
/// Implementors supply `ranks_match`; `can_activate` applies the zone and
/// occlusion checks shared by every variant. Both are pure functions of the
/// zone state.
pub trait RulesEngine {
    /// Can a playfield card of rank `card` be placed on a hand top of rank `hand_top`?
    fn ranks_match(&self, card: Rank, hand_top: Rank) -> bool;

    /// Is activating `id` a legal move right now?
    fn can_activate(&self, zones: &ZoneState, id: CardId) -> bool {
        if zones.stack_top_id() == Some(id) {
            return true;
        }
        if !zones.is_in_playfield(id) || zones.is_occluded(id) {
            return false;
        }

        match (zones.playfield_card(id), zones.hand_top_rank()) {
            (Some(card), Some(hand_top)) => self.ranks_match(card.rank, hand_top),
            _ => false,
        }
    }

    /// Every id that could be activated right now, sorted.
    fn legal_activations(&self, zones: &ZoneState) -> Vec<CardId> {
        let mut ids: Vec<CardId> = zones
            .playfield_cards()
            .iter()
            .map(|c| c.id)
            .chain(zones.stack_top_id())
            .filter(|&id| self.can_activate(zones, id))
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Ranks must be exactly one apart, with no wraparound between King and Ace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjacentRankRules;

impl RulesEngine for AdjacentRankRules {
    fn ranks_match(&self, card: Rank, hand_top: Rank) -> bool {
        card.is_adjacent(hand_top)
    }
}
