use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemPatch};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use crate::domain::logger::Logger;

pub struct PatchItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PatchItemUseCase for PatchItemUseCaseImpl {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Patching item: {}", params.id));

        let patch = ItemPatch::new(params.name, params.price)?;

        // Soft-deleted records cannot be patched, so the visible lookup is
        // the right one here.
        let mut item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        item.apply_patch(&patch);
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item patched: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::filter::ItemFilter;
    use crate::domain::item::model::NewItem;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn insert(&self, new: NewItem) -> Result<Item, RepositoryError>;
            async fn get_by_id(&self, id: u64) -> Result<Item, RepositoryError>;
            async fn get_by_id_any(&self, id: u64) -> Result<Item, RepositoryError>;
            async fn get_all(&self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_patch_price_and_keep_name() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Item::from_store(id, "Oat Milk".to_string(), 3.49, false)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: 2,
                name: None,
                price: Some(2.99),
            })
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Oat Milk");
        assert_eq!(item.price, 2.99);
    }

    #[tokio::test]
    async fn should_patch_name_and_keep_price() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Item::from_store(id, "Oat Milk".to_string(), 3.49, false)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: 2,
                name: Some("Soy Milk".to_string()),
                price: None,
            })
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Soy Milk");
        assert_eq!(item.price, 3.49);
    }

    #[tokio::test]
    async fn should_return_not_found_when_absent_or_deleted() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: 2,
                name: None,
                price: Some(2.99),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_price_before_lookup() {
        let mock_repo = MockItemRepo::new();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: 2,
                name: None,
                price: Some(-2.99),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::PriceNegative));
    }
}
