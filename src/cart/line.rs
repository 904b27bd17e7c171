use crate::{ExtraOption, Price, Product};

use super::LineKey;

/// One distinguishable row of the cart.
///
/// The subtotal is always computed from the line's fields, so it cannot
/// drift from `(base_price + extras) * quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    key: LineKey,
    product_id: String,
    product_name: String,
    base_price: Price,
    quantity: u32,
    /// Extras in the order they were selected.
    extras: Vec<ExtraOption>,
    /// Note as typed by the customer.
    note: String,
}

impl CartLine {
    pub(super) fn new(
        key: LineKey,
        product: &Product,
        extras: Vec<ExtraOption>,
        note: String,
    ) -> Self {
        Self {
            key,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            base_price: product.base_price,
            quantity: 1,
            extras,
            note,
        }
    }

    pub fn key(&self) -> &LineKey {
        &self.key
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn base_price(&self) -> Price {
        self.base_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn extras(&self) -> &[ExtraOption] {
        &self.extras
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Price of one unit: base price plus every extra.
    pub fn unit_price(&self) -> Price {
        self.base_price + self.extras.iter().map(|e| e.price).sum::<Price>()
    }

    pub fn subtotal(&self) -> Price {
        self.unit_price() * self.quantity
    }

    pub(super) fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Take one unit off. Returns `false` when the line held a single unit
    /// and must be dropped instead.
    pub(super) fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }
}
