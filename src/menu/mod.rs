//! Menu resolution.
//!
//! Turns the menu sheet into ordered categories of available products and
//! the extras sheet into a catalog of add-ons. Fetching never fails towards
//! the caller: problems are logged and an empty result is returned.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::MenuConfig;
use crate::csv::MenuRow;
use crate::{Extra, MenuCategory, Price, Product};

mod category;
pub use category::{CategoryLabel, resolve_category};

mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{CommandError, MenuError, SourceError};

mod extras;
pub use extras::{EXTRAS_KEYWORDS, applicable, extras_for, is_extras_eligible, parse_extras};

mod source;
pub use source::Source;

/// Menu shipped with the crate, used when no menu source is configured.
const BUNDLED_MENU: &str = include_str!("../../data/menu.csv");

/// Category for rows that leave `categoria` empty.
const FALLBACK_CATEGORY: &str = "Otros";

/// Fetch the menu, grouped by category in order of first appearance.
///
/// Uses the bundled menu when no source is configured. Returns an empty
/// menu when the source cannot be loaded or parsed.
pub async fn fetch_menu(config: &MenuConfig) -> Vec<MenuCategory> {
    let Some(source) = &config.menu_source else {
        warn!("menu source not configured, using bundled menu");
        return parse_menu(BUNDLED_MENU).unwrap_or_else(|e| {
            warn!(error = %e, "bundled menu is malformed");
            Vec::new()
        });
    };

    match load_menu(source).await {
        Ok(categories) => {
            info!(
                source = %source,
                categories = categories.len(),
                products = categories.iter().map(|c| c.products.len()).sum::<usize>(),
                "menu loaded"
            );
            categories
        }
        Err(e) => {
            warn!(source = %source, error = %e, "failed to load menu");
            Vec::new()
        }
    }
}

/// Fetch the extras catalog. Empty when unconfigured or unavailable.
pub async fn fetch_extras(config: &MenuConfig) -> Vec<Extra> {
    let Some(source) = &config.extras_source else {
        warn!("extras source not configured, no extras offered");
        return Vec::new();
    };

    match load_extras(source).await {
        Ok(extras) => {
            info!(source = %source, extras = extras.len(), "extras loaded");
            extras
        }
        Err(e) => {
            warn!(source = %source, error = %e, "failed to load extras");
            Vec::new()
        }
    }
}

async fn load_menu(source: &Source) -> Result<Vec<MenuCategory>, MenuError> {
    let text = source.load().await?;
    parse_menu(&text)
}

async fn load_extras(source: &Source) -> Result<Vec<Extra>, MenuError> {
    let text = source.load().await?;
    parse_extras(&text)
}

/// Parse a menu sheet into categories.
///
/// Unavailable rows are skipped; categories keep the order in which they
/// first appear and products keep row order.
pub fn parse_menu(text: &str) -> Result<Vec<MenuCategory>, MenuError> {
    let rows = crate::csv::read_menu_rows(text)?;

    let mut categories: Vec<MenuCategory> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows.into_iter().filter(MenuRow::is_available) {
        let key = if row.categoria.is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            row.categoria.clone()
        };

        let pos = *positions.entry(key.clone()).or_insert_with(|| {
            let resolved = resolve_category(&key);
            categories.push(MenuCategory {
                id: resolved.id,
                label: resolved.label,
                emoji: resolved.emoji,
                products: Vec::new(),
            });
            categories.len() - 1
        });

        if let Some(category) = categories.get_mut(pos) {
            category.products.push(into_product(row, key));
        }
    }

    Ok(categories)
}

fn into_product(row: MenuRow, category: String) -> Product {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    Product {
        id: row.id,
        name: row.nombre,
        base_price: Price::parse_lenient(&row.precio),
        category,
        description: row.descripcion,
        image: non_empty(row.url),
        badge: non_empty(row.badge),
    }
}
