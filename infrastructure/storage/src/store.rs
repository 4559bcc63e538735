use std::collections::BTreeMap;

use tokio::sync::{Mutex, MutexGuard};

use business::domain::cart::model::Cart;
use business::domain::item::model::Item;

/// Process-local storage for both shop collections.
///
/// A single mutex guards the two maps and the two id counters, so operations
/// that touch items and carts together never take more than one lock. Ids are
/// assigned monotonically per collection and never reused; since deletion is
/// soft, map keys only ever grow, and `BTreeMap` iteration therefore yields
/// records in insertion order.
pub struct ShopStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
pub struct StoreInner {
    pub(crate) items: BTreeMap<u64, Item>,
    pub(crate) carts: BTreeMap<u64, Cart>,
    next_item_id: u64,
    next_cart_id: u64,
}

impl ShopStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().await
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    /// Fresh item id, strictly greater than every id issued before.
    pub(crate) fn next_item_id(&mut self) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Fresh cart id, independent of the item counter.
    pub(crate) fn next_cart_id(&mut self) -> u64 {
        let id = self.next_cart_id;
        self.next_cart_id += 1;
        id
    }
}
