use crate::domain::item::model::Item;

/// A cart line is a snapshot of the item at the moment it was added; later
/// item edits never propagate here.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub available: bool,
}

impl CartLine {
    /// Snapshot with quantity 1. Soft-deleted items yield an unavailable line.
    pub fn snapshot_of(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
            available: !item.deleted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: u64,
    pub lines: Vec<CartLine>,
    /// Cached total, recomputed on every mutation.
    pub price: f64,
}

impl Cart {
    pub fn empty(id: u64) -> Self {
        Self {
            id,
            lines: Vec::new(),
            price: 0.0,
        }
    }

    /// Constructor for data already held by the store (no validation).
    pub fn from_store(id: u64, lines: Vec<CartLine>, price: f64) -> Self {
        Self { id, lines, price }
    }

    /// Adds a line. When the item is already in the cart, the existing line's
    /// quantity grows by one and the incoming snapshot is discarded; otherwise
    /// the snapshot is appended. The cached total is refreshed either way.
    pub fn add_line(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|l| l.item_id == line.item_id) {
            Some(existing) => existing.quantity += 1,
            None => self.lines.push(line),
        }
        self.price = self.total_price();
    }

    /// Sum of `price * quantity` over available lines only.
    pub fn total_price(&self) -> f64 {
        self.lines
            .iter()
            .filter(|line| line.available)
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}
