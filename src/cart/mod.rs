//! Cart engine.
//!
//! The cart is a reducer over "add one unit", "remove one unit" and "clear".
//! Lines are keyed by [`LineKey`]; totals are computed from the current lines
//! on every read. Also supports an async stream of commands.

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::model::CartCommand;
use crate::{ExtraOption, Price, Product};

mod key;
pub use key::LineKey;

mod line;
pub use line::CartLine;

mod shared;
pub use shared::SharedCart;

/// An in-memory shopping cart.
///
/// Lines keep insertion order; no two lines share a key.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Owned, consistent view of a cart at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u32,
}

/// Public API
impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Run the cart with the given command stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = CartCommand> + Unpin) {
        while let Some(command) = stream.next().await {
            self.apply(command);
        }
    }

    /// Apply a single command on top of the current cart state
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add {
                product,
                extras,
                note,
            } => {
                self.add(&product, extras, note);
            }
            CartCommand::Remove(key) => self.remove(&key),
            CartCommand::Clear => self.clear(),
        }
    }

    /// Add one unit of `product` with `extras` and `note`.
    ///
    /// Merges into the existing line with the same key, keeping its
    /// position; otherwise appends a new line. Extras and note are stored
    /// as supplied, normalization only affects the key.
    pub fn add(
        &mut self,
        product: &Product,
        extras: Vec<ExtraOption>,
        note: impl Into<String>,
    ) -> LineKey {
        let note = note.into();
        let key = LineKey::new(&product.id, &extras, &note);

        match self.lines.iter_mut().find(|l| l.key() == &key) {
            Some(line) => {
                line.increment();
                info!(
                    line = %key,
                    quantity = line.quantity(),
                    subtotal = %line.subtotal(),
                    "line incremented"
                );
            }
            None => {
                let line = CartLine::new(key.clone(), product, extras, note);
                info!(
                    line = %key,
                    subtotal = %line.subtotal(),
                    "line added"
                );
                self.lines.push(line);
            }
        }

        key
    }

    /// Remove one unit from the line with `key`.
    ///
    /// Unknown keys are ignored. A line holding one unit is dropped.
    pub fn remove(&mut self, key: &LineKey) {
        let Some((idx, line)) = self.lines.iter_mut().enumerate().find(|(_, l)| l.key() == key)
        else {
            info!(line = %key, "remove skipped, no such line");
            return;
        };

        if line.decrement() {
            info!(
                line = %key,
                quantity = line.quantity(),
                subtotal = %line.subtotal(),
                "line decremented"
            );
            return;
        }

        self.lines.remove(idx);
        info!(line = %key, "line removed");
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        let dropped = self.lines.len();
        self.lines.clear();
        info!(dropped, "cart cleared");
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Return one line by key
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.key() == key)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line subtotal.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of every line quantity.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }
}
