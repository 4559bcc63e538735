use super::errors::ItemError;

/// A catalogue item. Deletion is soft: the record stays in the store with
/// `deleted` set and is hidden from normal reads.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

impl Item {
    /// Constructor for data already held by the store (no validation).
    pub fn from_store(id: u64, name: String, price: f64, deleted: bool) -> Self {
        Self {
            id,
            name,
            price,
            deleted,
        }
    }

    /// Applies the provided patch fields in place; absent fields keep their
    /// current value.
    pub fn apply_patch(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Validated draft for creating or replacing an item. Ids are assigned by
/// the store, never by callers.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

impl NewItem {
    pub fn new(name: String, price: f64, deleted: bool) -> Result<Self, ItemError> {
        if price < 0.0 {
            return Err(ItemError::PriceNegative);
        }

        Ok(Self {
            name,
            price,
            deleted,
        })
    }
}

/// Partial update payload. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    pub fn new(name: Option<String>, price: Option<f64>) -> Result<Self, ItemError> {
        if matches!(price, Some(p) if p < 0.0) {
            return Err(ItemError::PriceNegative);
        }

        Ok(Self { name, price })
    }
}
