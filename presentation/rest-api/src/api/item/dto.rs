use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct ItemRequest {
    /// Item name
    pub name: String,
    /// Item price, non-negative
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Whether the item starts out soft-deleted
    #[oai(default)]
    pub deleted: bool,
}

/// Partial update. Unknown fields are rejected so that a typoed field name
/// cannot silently turn a patch into a no-op.
#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct PatchItemRequest {
    /// New item name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New item price, non-negative
    #[oai(skip_serializing_if_is_none, validator(minimum(value = "0")))]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Item price
    pub price: f64,
    /// Whether the item is soft-deleted
    pub deleted: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            deleted: item.deleted,
        }
    }
}
