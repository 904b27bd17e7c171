//! Core domain types shared by the menu and the cart.

use crate::Price;
use crate::cart::LineKey;

/// A product as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub base_price: Price,
    /// Raw category text from the sheet, used to decide extras eligibility.
    pub category: String,
    pub description: String,
    /// Image URL exactly as written in the sheet.
    pub image: Option<String>,
    pub badge: Option<String>,
}

impl Product {
    /// Create a product with no description, image or badge.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_price,
            category: category.into(),
            description: String::new(),
            image: None,
            badge: None,
        }
    }
}

/// An add-on chosen for a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtraOption {
    pub name: String,
    pub price: Price,
}

impl ExtraOption {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An entry of the extras catalog, tagged with the categories it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub id: String,
    pub name: String,
    pub price: Price,
    /// Lower-cased kind, `"extra"` unless the sheet says otherwise.
    pub kind: String,
    /// Lower-cased, trimmed category tokens.
    pub categories: Vec<String>,
}

impl Extra {
    /// The option a customer picks when choosing this extra.
    pub fn option(&self) -> ExtraOption {
        ExtraOption::new(self.name.clone(), self.price)
    }
}

/// A menu category with its products in sheet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub products: Vec<Product>,
}

/// A mutation of the cart, one per user interaction.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of a product with the given extras and note.
    Add {
        product: Product,
        extras: Vec<ExtraOption>,
        note: String,
    },
    /// Remove one unit from the line with this key.
    Remove(LineKey),
    /// Drop every line.
    Clear,
}
