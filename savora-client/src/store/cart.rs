//! Cart state container
//!
//! Ephemeral, client-only. Invariants: one line per item id, quantities
//! start at 1. Cleared on logout and after a successful checkout.

use rust_decimal::Decimal;

use shared::models::{Item, OrderDetail};

/// One cart line: item snapshot at add time plus quantity
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

impl CartLine {
    /// Line total (price x quantity)
    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// In-memory shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item: increments the quantity if the item is already present,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, item: Item) {
        match self.lines.iter_mut().find(|l| l.item.item_id == item.item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Remove the line for an item id. Removing an absent id is a no-op.
    pub fn remove(&mut self, item_id: i64) {
        self.lines.retain(|l| l.item.item_id != item_id);
    }

    /// Overwrite the quantity of an existing line. Absent ids are a no-op;
    /// callers are responsible for keeping the quantity at 1 or more.
    pub fn set_quantity(&mut self, item_id: i64, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total: sum of price x quantity over all lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Build the order details payload for checkout.
    pub fn to_details(&self) -> Vec<OrderDetail> {
        self.lines
            .iter()
            .map(|l| OrderDetail {
                item_id: l.item.item_id,
                quantity: l.quantity,
            })
            .collect()
    }
}
