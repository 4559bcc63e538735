use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::filter::CartFilter;
use crate::domain::cart::model::Cart;

pub struct GetAllCartsParams {
    pub filter: CartFilter,
}

#[async_trait]
pub trait GetAllCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError>;
}
