//! Occlusion topology over playfield cards.
//!
//! For every playfield card the topology keeps how many other cards block it
//! and which cards it blocks. Two cards are linked when their bounding boxes
//! overlap; the one with the larger id is on top, since cards are dealt in id
//! order.
//!
//! ## Cost
//!
//! - `rebuild`: O(n²) box tests, done once per level load
//! - `insert`: O(n) box tests against the current playfield
//! - `remove`: O(k) where k is the number of cards the removed card blocked
//!
//! ## Invariant
//!
//! `occluded_by_count(x)` equals the number of entries whose `occludes` list
//! contains `x`. Every public method preserves this.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::Aabb;
use crate::cards::{Card, CardId};
use crate::core::config::EngineConfig;

/// Topology entry for one playfield card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverEntry {
    /// Number of playfield cards on top of this one.
    pub occluded_by: u32,

    /// Cards this one is on top of, sorted by id.
    pub occludes: SmallVec<[CardId; 4]>,
}

/// Who-blocks-whom among playfield cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OcclusionTopology {
    config: EngineConfig,
    entries: FxHashMap<CardId, CoverEntry>,
}

impl OcclusionTopology {
    /// Create an empty topology using the given card geometry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            entries: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recompute the whole topology from a playfield snapshot.
    pub fn rebuild<'a>(&mut self, playfield: impl IntoIterator<Item = &'a Card>) {
        self.entries.clear();

        let mut cards: Vec<(CardId, Aabb)> = playfield
            .into_iter()
            .map(|card| (card.id, Aabb::of_card(card.position, &self.config)))
            .collect();
        cards.sort_unstable_by_key(|(id, _)| *id);

        for (id, _) in &cards {
            self.entries.insert(*id, CoverEntry::default());
        }

        for (i, (lower, lower_box)) in cards.iter().enumerate() {
            for (upper, upper_box) in &cards[i + 1..] {
                if lower != upper && lower_box.intersects(upper_box) {
                    self.link(*lower, *upper);
                }
            }
        }
    }

    /// Add one card that has just entered the playfield.
    ///
    /// `playfield` is the rest of the playfield; an entry for `card.id`
    /// itself is skipped if present.
    pub fn insert<'a>(&mut self, card: &Card, playfield: impl IntoIterator<Item = &'a Card>) {
        if self.entries.contains_key(&card.id) {
            self.remove(card.id);
        }
        self.entries.insert(card.id, CoverEntry::default());

        let card_box = Aabb::of_card(card.position, &self.config);
        for other in playfield {
            if other.id == card.id || !self.entries.contains_key(&other.id) {
                continue;
            }
            if !card_box.intersects(&Aabb::of_card(other.position, &self.config)) {
                continue;
            }

            if other.id < card.id {
                self.link(other.id, card.id);
            } else {
                self.link(card.id, other.id);
            }
        }
    }

    /// Erase a card that has left the playfield.
    ///
    /// Returns `false` if the card had no entry.
    pub fn remove(&mut self, id: CardId) -> bool {
        let Some(entry) = self.entries.remove(&id) else {
            return false;
        };

        for covered in entry.occludes {
            if let Some(below) = self.entries.get_mut(&covered) {
                below.occluded_by = below.occluded_by.saturating_sub(1);
            }
        }

        // Detach from any card still listed as on top of this one.
        if entry.occluded_by > 0 {
            for above in self.entries.values_mut() {
                if let Ok(pos) = above.occludes.binary_search(&id) {
                    above.occludes.remove(pos);
                }
            }
        }

        true
    }

    /// Is any playfield card on top of this one?
    ///
    /// Cards not on the playfield are never occluded.
    #[must_use]
    pub fn is_occluded(&self, id: CardId) -> bool {
        self.occluded_by_count(id) != 0
    }

    /// Number of cards on top of this one (0 if absent).
    #[must_use]
    pub fn occluded_by_count(&self, id: CardId) -> u32 {
        self.entries.get(&id).map_or(0, |e| e.occluded_by)
    }

    /// Cards this one is on top of, sorted by id (empty if absent).
    #[must_use]
    pub fn occludes(&self, id: CardId) -> &[CardId] {
        self.entries.get(&id).map_or(&[], |e| e.occludes.as_slice())
    }

    #[must_use]
    pub fn entry(&self, id: CardId) -> Option<&CoverEntry> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of every occluded card, sorted.
    #[must_use]
    pub fn occluded_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, e)| e.occluded_by != 0)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Check the count/list symmetry invariant over every entry.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut counted: FxHashMap<CardId, u32> = FxHashMap::default();
        for entry in self.entries.values() {
            for covered in &entry.occludes {
                if !self.entries.contains_key(covered) {
                    return false;
                }
                *counted.entry(*covered).or_default() += 1;
            }
        }

        self.entries
            .iter()
            .all(|(id, e)| counted.get(id).copied().unwrap_or(0) == e.occluded_by)
    }

    /// Record that `upper` sits on top of `lower`.
    fn link(&mut self, lower: CardId, upper: CardId) {
        let Some(above) = self.entries.get_mut(&upper) else {
            return;
        };
        let Err(pos) = above.occludes.binary_search(&lower) else {
            return;
        };
        above.occludes.insert(pos, lower);

        if let Some(below) = self.entries.get_mut(&lower) {
            below.occluded_by += 1;
        }
    }
}
