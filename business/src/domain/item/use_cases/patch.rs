use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct PatchItemParams {
    pub id: u64,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[async_trait]
pub trait PatchItemUseCase: Send + Sync {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError>;
}
