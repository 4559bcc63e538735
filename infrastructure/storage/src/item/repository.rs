use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::item::filter::ItemFilter;
use business::domain::item::model::{Item, NewItem};
use business::domain::item::repository::ItemRepository;

use crate::store::ShopStore;

pub struct ItemRepositoryInMemory {
    store: Arc<ShopStore>,
}

impl ItemRepositoryInMemory {
    pub fn new(store: Arc<ShopStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryInMemory {
    async fn insert(&self, new: NewItem) -> Result<Item, RepositoryError> {
        let mut inner = self.store.lock().await;
        let id = inner.next_item_id();
        let item = Item::from_store(id, new.name, new.price, new.deleted);
        inner.items.insert(id, item.clone());

        Ok(item)
    }

    async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError> {
        let inner = self.store.lock().await;

        inner
            .items
            .get(&id)
            .filter(|item| !item.deleted)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_id_any(&self, id: u64) -> Result<Item, RepositoryError> {
        let inner = self.store.lock().await;

        inner
            .items
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError> {
        let inner = self.store.lock().await;

        // Match against every record first, then window the matches.
        Ok(inner
            .items
            .values()
            .filter(|item| filter.matches(item))
            .skip(filter.offset)
            .take(filter.limit)
            .cloned()
            .collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut inner = self.store.lock().await;
        inner.items.insert(item.id, item.clone());

        Ok(())
    }
}
