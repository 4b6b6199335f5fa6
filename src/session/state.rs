//! Session state: the dealt items, current selection, and progress.
//!
//! Uses `im` persistent structures so the state can be snapshotted in O(1)
//! (runner checkpoints, tests comparing before/after).

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHashMap;

use crate::items::{Item, ItemId};

/// Mutable state of one play-through.
///
/// ## Invariants
///
/// - `0 <= matched_pairs <= total_pairs`
/// - `selected` is `None` or an item that is not inert
#[derive(Clone, Debug)]
pub struct SessionState {
    items: Vector<Item>,
    index: FxHashMap<ItemId, usize>,
    inert: ImHashSet<ItemId>,
    selected: Option<ItemId>,
    matched_pairs: usize,
    total_pairs: usize,
}

impl SessionState {
    /// Wrap a freshly dealt deck.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let index = items.iter().enumerate().map(|(i, item)| (item.id, i)).collect();
        let total_pairs = items.len() / 2;
        Self {
            items: items.into_iter().collect(),
            index,
            inert: ImHashSet::new(),
            selected: None,
            matched_pairs: 0,
            total_pairs,
        }
    }

    /// Items in deal order.
    #[must_use]
    pub fn items(&self) -> &Vector<Item> {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).and_then(|&i| self.items.get(i))
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// True if `item` is exactly the item this state holds under its id.
    #[must_use]
    pub fn holds(&self, item: &Item) -> bool {
        self.get(item.id) == Some(item)
    }

    /// Matched and locked out of selection.
    #[must_use]
    pub fn is_inert(&self, id: ItemId) -> bool {
        self.inert.contains(&id)
    }

    #[must_use]
    pub fn inert_count(&self) -> usize {
        self.inert.len()
    }

    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select an item. Ignored for unknown or inert ids.
    pub fn select(&mut self, id: ItemId) {
        if self.contains(id) && !self.is_inert(id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Count one more found pair, saturating at `total_pairs`.
    pub fn record_match(&mut self) {
        self.matched_pairs = (self.matched_pairs + 1).min(self.total_pairs);
    }

    /// Lock both items out and drop them from the selection.
    pub fn retire(&mut self, first: ItemId, second: ItemId) {
        self.inert.insert(first);
        self.inert.insert(second);
        if matches!(self.selected, Some(id) if id == first || id == second) {
            self.selected = None;
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    /// HUD readout, e.g. "1/3 MATCHED!".
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}/{} MATCHED!", self.matched_pairs, self.total_pairs)
    }
}
