use std::fmt;

use crate::{ExtraOption, Price};

/// Identity of a cart line: product, extras as an unordered set and
/// normalized note, compared by value.
///
/// Two requests for the same product whose extras differ only in selection
/// order, and whose notes differ only in case or surrounding whitespace,
/// produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    product_id: String,
    /// Sorted `(name, price)` fingerprint.
    extras: Vec<(String, Price)>,
    /// Trimmed and lower-cased; `None` when blank.
    note: Option<String>,
}

impl LineKey {
    pub fn new(product_id: &str, extras: &[ExtraOption], note: &str) -> Self {
        let mut fingerprint: Vec<(String, Price)> = extras
            .iter()
            .map(|e| (e.name.clone(), e.price))
            .collect();
        fingerprint.sort();

        Self {
            product_id: product_id.to_string(),
            extras: fingerprint,
            note: normalize_note(note),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

fn normalize_note(note: &str) -> Option<String> {
    let note = note.trim();
    (!note.is_empty()).then(|| note.to_lowercase())
}

/// Renders `product[__name:price|name:price][__acl:note]`.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_id)?;
        if !self.extras.is_empty() {
            f.write_str("__")?;
            for (i, (name, price)) in self.extras.iter().enumerate() {
                if i > 0 {
                    f.write_str("|")?;
                }
                write!(f, "{name}:{price}")?;
            }
        }
        if let Some(note) = &self.note {
            write!(f, "__acl:{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(name: &str, price: i64) -> ExtraOption {
        ExtraOption::new(name, Price::new(price))
    }

    #[test]
    fn extras_order_does_not_matter() {
        let a = LineKey::new("p1", &[extra("Cheese", 10), extra("Bacon", 20)], "");
        let b = LineKey::new("p1", &[extra("Bacon", 20), extra("Cheese", 10)], "");
        assert_eq!(a, b);
    }

    #[test]
    fn note_case_and_whitespace_do_not_matter() {
        let a = LineKey::new("p1", &[], "Sin Cebolla ");
        let b = LineKey::new("p1", &[], "  sin cebolla");
        assert_eq!(a, b);
        assert_eq!(a.note(), Some("sin cebolla"));
    }

    #[test]
    fn blank_note_is_no_note() {
        let a = LineKey::new("p1", &[], "   ");
        let b = LineKey::new("p1", &[], "");
        assert_eq!(a, b);
        assert_eq!(a.note(), None);
    }

    #[test]
    fn different_note_content_differs() {
        let a = LineKey::new("p1", &[], "sin cebolla");
        let b = LineKey::new("p1", &[], "sin tomate");
        assert_ne!(a, b);
    }

    #[test]
    fn different_extra_price_or_name_differs() {
        let base = LineKey::new("p1", &[extra("Cheese", 10)], "");
        assert_ne!(base, LineKey::new("p1", &[extra("Cheese", 15)], ""));
        assert_ne!(base, LineKey::new("p1", &[extra("Cheddar", 10)], ""));
        assert_ne!(base, LineKey::new("p1", &[], ""));
    }

    #[test]
    fn repeated_extra_differs_from_single() {
        let once = LineKey::new("p1", &[extra("Cheese", 10)], "");
        let twice = LineKey::new("p1", &[extra("Cheese", 10), extra("Cheese", 10)], "");
        assert_ne!(once, twice);
    }

    #[test]
    fn different_product_differs() {
        assert_ne!(LineKey::new("p1", &[], ""), LineKey::new("p2", &[], ""));
    }

    #[test]
    fn separator_inside_fields_does_not_collide() {
        // Rendered forms match, keys do not.
        let a = LineKey::new("p1__acl:x", &[], "");
        let b = LineKey::new("p1", &[], "x");
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn display_renders_all_parts() {
        let key = LineKey::new(
            "p1",
            &[extra("Cheese", 10), extra("Bacon", 20)],
            " Sin Sal ",
        );
        assert_eq!(key.to_string(), "p1__Bacon:20|Cheese:10__acl:sin sal");
        assert_eq!(LineKey::new("p1", &[], "").to_string(), "p1");
    }
}
