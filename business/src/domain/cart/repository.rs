use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::CartFilter;
use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Creates an empty cart under a freshly assigned id.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Cart, RepositoryError>;
    /// Filtered listing, windowed by the filter's offset/limit.
    async fn get_all(&self, filter: &CartFilter) -> Result<Vec<Cart>, RepositoryError>;
    /// Upserts the record under `cart.id`.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
