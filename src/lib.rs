pub mod cart;
pub mod config;
pub mod csv;
pub mod menu;
pub mod model;
pub mod price;

pub use cart::{Cart, CartLine, CartSnapshot, LineKey, SharedCart};
pub use config::MenuConfig;
pub use model::{CartCommand, Extra, ExtraOption, MenuCategory, Product};
pub use price::Price;
