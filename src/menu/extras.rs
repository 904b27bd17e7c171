//! Extras catalog and category eligibility.
//!
//! Category matching is a loose substring test in both directions, so short
//! tokens can match more categories than intended.

use crate::csv::ExtraRow;
use crate::{Extra, ExtraOption, Price};

use super::MenuError;

/// Category keywords that make a product offer extras at all.
pub const EXTRAS_KEYWORDS: &[&str] = &["hamburguesa", "combo", "lomo", "hamburguesas mas papas"];

const DEFAULT_KIND: &str = "extra";

/// Parse an extras sheet, dropping entries without an id or a name.
pub fn parse_extras(text: &str) -> Result<Vec<Extra>, MenuError> {
    let rows = crate::csv::read_extra_rows(text)?;
    Ok(rows.into_iter().filter_map(into_extra).collect())
}

fn into_extra(row: ExtraRow) -> Option<Extra> {
    if row.id.is_empty() || row.nombre.is_empty() {
        return None;
    }

    let kind = match row.tipo.trim() {
        "" => DEFAULT_KIND.to_string(),
        kind => kind.to_lowercase(),
    };
    let categories = row
        .categoria_aplica
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    Some(Extra {
        id: row.id,
        name: row.nombre,
        price: Price::parse_lenient(&row.precio),
        kind,
        categories,
    })
}

/// Whether products of `category` offer extras.
pub fn is_extras_eligible(category: &str) -> bool {
    let category = category.to_lowercase();
    EXTRAS_KEYWORDS.iter().any(|k| category.contains(k))
}

/// The extras that apply to `category`, in catalog order.
pub fn extras_for(all: &[Extra], category: &str) -> Vec<ExtraOption> {
    applicable(all, category).map(Extra::option).collect()
}

/// Like [`extras_for`], but borrowing the catalog entries.
pub fn applicable<'a>(all: &'a [Extra], category: &str) -> impl Iterator<Item = &'a Extra> {
    let lower = category.to_lowercase();
    let compact: String = lower.chars().filter(|c| !c.is_whitespace()).collect();

    all.iter().filter(move |extra| {
        !lower.is_empty()
            && extra
                .categories
                .iter()
                .any(|token| lower.contains(token.as_str()) || token.contains(compact.as_str()))
    })
}
