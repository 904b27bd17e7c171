use crate::cart::LineKey;
use crate::csv::CommandRow;
use crate::model::CartCommand;
use crate::{Extra, ExtraOption, MenuCategory, Product};

use super::{CommandError, applicable, is_extras_eligible};

/// Resolved menu and extras, used to turn command rows into cart commands.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
    extras: Vec<Extra>,
}

impl Catalog {
    pub fn new(categories: Vec<MenuCategory>, extras: Vec<Extra>) -> Self {
        Self { categories, extras }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Find a product by id across all categories
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|c| c.products.iter())
            .find(|p| p.id == id)
    }

    /// Resolve a command row against the menu:
    /// - `add`/`remove` need a known product
    /// - extras must be offered for the product's category
    /// - `clear` ignores every other column
    pub fn resolve(&self, row: CommandRow) -> Result<CartCommand, CommandError> {
        match row.op.as_str() {
            "add" => {
                let (product, extras) = self.resolve_line(&row)?;
                Ok(CartCommand::Add {
                    product: product.clone(),
                    extras,
                    note: row.note,
                })
            }
            "remove" => {
                let (product, extras) = self.resolve_line(&row)?;
                Ok(CartCommand::Remove(LineKey::new(
                    &product.id,
                    &extras,
                    &row.note,
                )))
            }
            "clear" => Ok(CartCommand::Clear),
            other => Err(CommandError::UnrecognizedOp {
                line: row.line,
                op: other.to_string(),
            }),
        }
    }

    fn resolve_line(&self, row: &CommandRow) -> Result<(&Product, Vec<ExtraOption>), CommandError> {
        if row.product.is_empty() {
            return Err(CommandError::MissingProduct {
                line: row.line,
                op: row.op.clone(),
            });
        }

        let product = self
            .product(&row.product)
            .ok_or_else(|| CommandError::UnknownProduct {
                line: row.line,
                product: row.product.clone(),
            })?;

        let mut names = row.extra_names().peekable();
        if names.peek().is_some() && !is_extras_eligible(&product.category) {
            return Err(CommandError::ExtrasNotOffered {
                line: row.line,
                product: product.id.clone(),
            });
        }

        let extras = names
            .map(|name| {
                applicable(&self.extras, &product.category)
                    .find(|e| e.name.eq_ignore_ascii_case(name))
                    .map(Extra::option)
                    .ok_or_else(|| CommandError::UnknownExtra {
                        line: row.line,
                        product: product.id.clone(),
                        extra: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((product, extras))
    }
}
