use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;

pub struct AddItemToCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item_id, params.cart_id
        ));

        let mut cart = self
            .cart_repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // Soft-deleted items can still be added; their snapshot is marked
        // unavailable and excluded from the total.
        let item = self
            .item_repository
            .get_by_id_any(params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        cart.add_line(CartLine::snapshot_of(&item));
        self.cart_repository.save(&cart).await?;

        self.logger
            .info(&format!("Cart {} now totals {}", cart.id, cart.price));
        Ok(cart)
    }
}
