use super::model::Cart;
use crate::domain::item::filter::DEFAULT_LIMIT;

/// Listing filter for carts. Records are matched first; the offset/limit
/// window is then applied over the matches in insertion order.
#[derive(Debug, Clone)]
pub struct CartFilter {
    pub offset: usize,
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<usize>,
    pub max_quantity: Option<usize>,
}

impl Default for CartFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            min_price: None,
            max_price: None,
            min_quantity: None,
            max_quantity: None,
        }
    }
}

impl CartFilter {
    /// Price bounds are inclusive. Both quantity bounds act as upper limits
    /// on the cart's line count; `min_quantity` has never been enforced as a
    /// lower bound and clients depend on the current behavior (see DESIGN.md).
    pub fn matches(&self, cart: &Cart) -> bool {
        self.min_price.is_none_or(|min| cart.price >= min)
            && self.max_price.is_none_or(|max| cart.price <= max)
            && self.min_quantity.is_none_or(|min| cart.lines.len() <= min)
            && self.max_quantity.is_none_or(|max| cart.lines.len() <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::item::model::Item;

    fn cart_with_lines(count: u64, price_each: f64) -> Cart {
        let mut cart = Cart::empty(0);
        for id in 0..count {
            let item = Item::from_store(id, format!("item-{id}"), price_each, false);
            cart.add_line(CartLine::snapshot_of(&item));
        }
        cart
    }

    #[test]
    fn should_match_everything_by_default() {
        assert!(CartFilter::default().matches(&cart_with_lines(3, 2.0)));
    }

    #[test]
    fn should_treat_price_bounds_as_inclusive() {
        let filter = CartFilter {
            min_price: Some(6.0),
            max_price: Some(6.0),
            ..CartFilter::default()
        };

        assert!(filter.matches(&cart_with_lines(3, 2.0)));
        assert!(!filter.matches(&cart_with_lines(4, 2.0)));
    }

    #[test]
    fn should_cap_line_count_by_max_quantity() {
        let filter = CartFilter {
            max_quantity: Some(2),
            ..CartFilter::default()
        };

        assert!(filter.matches(&cart_with_lines(2, 1.0)));
        assert!(!filter.matches(&cart_with_lines(3, 1.0)));
    }

    #[test]
    fn should_cap_line_count_by_min_quantity_as_well() {
        // Upper-bound semantics for both bounds, kept for wire compatibility.
        let filter = CartFilter {
            min_quantity: Some(2),
            ..CartFilter::default()
        };

        assert!(filter.matches(&cart_with_lines(2, 1.0)));
        assert!(!filter.matches(&cart_with_lines(3, 1.0)));
    }
}
