use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::Item;

pub struct GetAllItemsParams {
    pub filter: ItemFilter,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
