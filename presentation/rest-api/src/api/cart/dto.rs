use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Id of the item this line snapshots
    pub id: u64,
    /// Item name at the time it was added
    pub name: String,
    /// Item price at the time it was added
    pub price: f64,
    /// Number of units of this item
    pub quantity: u32,
    /// Whether the item was still available when last added
    pub available: bool,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.item_id,
            name: line.name,
            price: line.price,
            quantity: line.quantity,
            available: line.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart unique identifier
    pub id: u64,
    /// Cart lines in the order items were first added
    pub items: Vec<CartLineResponse>,
    /// Total over available lines
    pub price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            items: cart.lines.into_iter().map(|l| l.into()).collect(),
            price: cart.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartCreatedResponse {
    /// Identifier of the newly created cart
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::item::model::Item;

    #[test]
    fn should_expose_item_id_as_line_id_on_the_wire() {
        let item = Item::from_store(7, "Oat Milk".to_string(), 3.49, false);
        let line = CartLine::snapshot_of(&item);

        let response = CartLineResponse::from(line);

        assert_eq!(response.id, 7);
        assert_eq!(response.quantity, 1);
        assert!(response.available);
    }

    #[test]
    fn should_map_cart_with_lines_onto_response() {
        let mut cart = Cart::empty(2);
        cart.add_line(CartLine::snapshot_of(&Item::from_store(
            0,
            "Oat Milk".to_string(),
            3.49,
            false,
        )));

        let response = CartResponse::from(cart);

        assert_eq!(response.id, 2);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.price, 3.49);
    }
}
