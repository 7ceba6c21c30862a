//! Low-stock and zero-stock warning lists.
//!
//! Both lists hold store ids in the order the stores were flagged, and that
//! order is what the route optimizer sees: low-stock stores come first,
//! then zero-stock ones.  A store is never on both lists at once.

use sc_core::StoreId;
use sc_network::Store;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarningLists {
    low:  Vec<StoreId>,
    zero: Vec<StoreId>,
}

impl WarningLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low(&self) -> &[StoreId] {
        &self.low
    }

    pub fn zero(&self) -> &[StoreId] {
        &self.zero
    }

    #[inline]
    pub fn contains_low(&self, id: StoreId) -> bool {
        self.low.contains(&id)
    }

    #[inline]
    pub fn contains_zero(&self, id: StoreId) -> bool {
        self.zero.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.zero.is_empty()
    }

    /// Number of flagged stores across both lists.
    pub fn len(&self) -> usize {
        self.low.len() + self.zero.len()
    }

    /// Flag `id` as low-stock.  Idempotent; drops it from the zero list.
    pub fn flag_low(&mut self, id: StoreId) {
        self.zero.retain(|&s| s != id);
        if !self.low.contains(&id) {
            self.low.push(id);
        }
    }

    /// Flag `id` as out of stock.  Idempotent; drops it from the low list.
    pub fn flag_zero(&mut self, id: StoreId) {
        self.low.retain(|&s| s != id);
        if !self.zero.contains(&id) {
            self.zero.push(id);
        }
    }

    /// Remove `id` from both lists.
    pub fn clear(&mut self, id: StoreId) {
        self.low.retain(|&s| s != id);
        self.zero.retain(|&s| s != id);
    }

    /// Restock candidates: low-stock ids, then zero-stock ids.
    pub fn candidates(&self) -> Vec<StoreId> {
        self.low.iter().chain(&self.zero).copied().collect()
    }

    /// End-of-sales check for one store.
    ///
    /// Empty stores go on the zero list; stores at or below their threshold
    /// go on the low list.  Stores above the threshold are left alone: only
    /// a delivery takes a store off a list.
    pub fn inventory_check(&mut self, store: &Store) {
        if store.is_empty() {
            self.flag_zero(store.id);
        } else if store.curr_stock <= store.min_stock {
            self.flag_low(store.id);
        }
    }

    /// Post-delivery update for one store.
    ///
    /// - back at or above the threshold → off both lists
    /// - still short but positive → low list only
    /// - still empty → unchanged (it stays wherever it already was)
    pub fn delivery_check(&mut self, store: &Store) {
        if store.is_empty() {
            return;
        }
        if store.curr_stock >= store.min_stock {
            self.clear(store.id);
        } else {
            self.flag_low(store.id);
        }
    }
}
