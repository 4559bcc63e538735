use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::filter::CartFilter;
use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::store::ShopStore;

pub struct CartRepositoryInMemory {
    store: Arc<ShopStore>,
}

impl CartRepositoryInMemory {
    pub fn new(store: Arc<ShopStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn create(&self) -> Result<Cart, RepositoryError> {
        let mut inner = self.store.lock().await;
        let id = inner.next_cart_id();
        let cart = Cart::empty(id);
        inner.carts.insert(id, cart.clone());

        Ok(cart)
    }

    async fn get_by_id(&self, id: u64) -> Result<Cart, RepositoryError> {
        let inner = self.store.lock().await;

        inner
            .carts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self, filter: &CartFilter) -> Result<Vec<Cart>, RepositoryError> {
        let inner = self.store.lock().await;

        // Match against every record first, then window the matches.
        Ok(inner
            .carts
            .values()
            .filter(|cart| filter.matches(cart))
            .skip(filter.offset)
            .take(filter.limit)
            .cloned()
            .collect())
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut inner = self.store.lock().await;
        inner.carts.insert(cart.id, cart.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartLine;
    use business::domain::item::model::Item;

    fn repository() -> CartRepositoryInMemory {
        CartRepositoryInMemory::new(Arc::new(ShopStore::new()))
    }

    fn cart_with_line(id_seed: u64, cart: &mut Cart, price: f64) {
        let item = Item::from_store(id_seed, format!("item-{id_seed}"), price, false);
        cart.add_line(CartLine::snapshot_of(&item));
    }

    #[tokio::test]
    async fn should_create_empty_carts_with_increasing_ids() {
        let repo = repository();

        let first = repo.create().await.unwrap();
        let second = repo.create().await.unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert!(first.lines.is_empty());
        assert_eq!(first.price, 0.0);
    }

    #[tokio::test]
    async fn should_return_saved_cart_by_id() {
        let repo = repository();

        let mut cart = repo.create().await.unwrap();
        cart_with_line(0, &mut cart, 3.49);
        repo.save(&cart).await.unwrap();

        let loaded = repo.get_by_id(cart.id).await.unwrap();

        assert_eq!(loaded.lines.len(), 1);
        assert_eq!(loaded.price, 3.49);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repo = repository();

        let result = repo.get_by_id(999).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_filter_carts_by_price_then_window() {
        let repo = repository();

        // Five carts totalling 1.0, 2.0, .., 5.0.
        for i in 1..=5u64 {
            let mut cart = repo.create().await.unwrap();
            cart_with_line(i, &mut cart, i as f64);
            repo.save(&cart).await.unwrap();
        }

        let filter = CartFilter {
            offset: 1,
            limit: 2,
            min_price: Some(2.0),
            ..CartFilter::default()
        };
        let carts = repo.get_all(&filter).await.unwrap();

        let totals: Vec<f64> = carts.iter().map(|cart| cart.price).collect();
        assert_eq!(totals, vec![3.0, 4.0]);
    }

    #[tokio::test]
    async fn should_cap_line_count_by_both_quantity_bounds() {
        let repo = repository();

        for line_count in 1..=3u64 {
            let mut cart = repo.create().await.unwrap();
            for i in 0..line_count {
                cart_with_line(i, &mut cart, 1.0);
            }
            repo.save(&cart).await.unwrap();
        }

        let filter = CartFilter {
            min_quantity: Some(2),
            ..CartFilter::default()
        };
        let carts = repo.get_all(&filter).await.unwrap();

        // Upper-bound semantics: carts with one or two lines match.
        assert_eq!(carts.len(), 2);
        assert!(carts.iter().all(|cart| cart.lines.len() <= 2));
    }
}
