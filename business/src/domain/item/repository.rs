use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::ItemFilter;
use super::model::{Item, NewItem};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores a draft under a freshly assigned id and returns the full entity.
    async fn insert(&self, new: NewItem) -> Result<Item, RepositoryError>;
    /// NotFound when the id is absent or the record is soft-deleted.
    async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError>;
    /// Like `get_by_id`, but soft-deleted records are returned too.
    async fn get_by_id_any(&self, id: u64) -> Result<Item, RepositoryError>;
    /// Filtered listing, windowed by the filter's offset/limit.
    async fn get_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
    /// Upserts the record under `item.id`.
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
}
