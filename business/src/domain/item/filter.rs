use super::model::Item;

pub const DEFAULT_LIMIT: usize = 10;

/// Listing filter for items. Records are matched first; the offset/limit
/// window is then applied over the matches in insertion order.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    pub offset: usize,
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: bool,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            min_price: None,
            max_price: None,
            show_deleted: false,
        }
    }
}

impl ItemFilter {
    /// Price bounds are inclusive; soft-deleted records only match when
    /// `show_deleted` is set.
    pub fn matches(&self, item: &Item) -> bool {
        self.min_price.is_none_or(|min| item.price >= min)
            && self.max_price.is_none_or(|max| item.price <= max)
            && (self.show_deleted || !item.deleted)
    }
}
