use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use crate::domain::logger::Logger;

pub struct ReplaceItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceItemUseCase for ReplaceItemUseCaseImpl {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Replacing item: {}", params.id));

        // Soft-deleted records can be replaced; only a missing id fails.
        // Replacement never creates a record under a fresh id.
        self.repository
            .get_by_id_any(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        let draft = NewItem::new(params.name, params.price, params.deleted)?;
        let item = Item::from_store(params.id, draft.name, draft.price, draft.deleted);
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item replaced: {}", item.id));
        Ok(item)
    }
}
