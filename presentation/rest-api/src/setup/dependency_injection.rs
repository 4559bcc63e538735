use std::sync::Arc;

use logger::TracingLogger;
use storage::cart::repository::CartRepositoryInMemory;
use storage::item::repository::ItemRepositoryInMemory;
use storage::store::ShopStore;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get_all::GetAllCartsUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::patch::PatchItemUseCaseImpl;
use business::application::item::replace::ReplaceItemUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub item_api: crate::api::item::routes::ItemApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(store: Arc<ShopStore>) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters; both repositories share the one store
        let item_repository = Arc::new(ItemRepositoryInMemory::new(store.clone()));
        let cart_repository = Arc::new(CartRepositoryInMemory::new(store));

        // Item use cases
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_item_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_items_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let replace_item_use_case = Arc::new(ReplaceItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let patch_item_use_case = Arc::new(PatchItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_by_id_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_carts_use_case = Arc::new(GetAllCartsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_to_cart_use_case = Arc::new(AddItemToCartUseCaseImpl {
            cart_repository,
            item_repository: item_repository.clone(),
            logger,
        });

        let item_api = crate::api::item::routes::ItemApi::new(
            create_item_use_case,
            get_item_by_id_use_case,
            get_all_items_use_case,
            replace_item_use_case,
            patch_item_use_case,
            delete_item_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            create_cart_use_case,
            get_cart_by_id_use_case,
            get_all_carts_use_case,
            add_item_to_cart_use_case,
        );

        Self {
            health_api,
            item_api,
            cart_api,
        }
    }
}
