use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartsUseCase for GetAllCartsUseCaseImpl {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError> {
        self.logger.debug("Listing carts");

        let carts = self.repository.get_all(&params.filter).await?;

        self.logger
            .debug(&format!("Listed {} carts", carts.len()));
        Ok(carts)
    }
}
