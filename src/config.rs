//! Source configuration read from the environment.

use std::env;

use crate::menu::Source;

/// Environment variable holding the menu sheet location.
pub const MENU_SOURCE_VAR: &str = "MENU_SOURCE";

/// Environment variable holding the extras sheet location.
pub const EXTRAS_SOURCE_VAR: &str = "EXTRAS_SOURCE";

/// Where menu and extras are loaded from. `None` means not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    pub menu_source: Option<Source>,
    pub extras_source: Option<Source>,
}

impl MenuConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source = |name: &str| lookup(name).as_deref().and_then(Source::parse);
        Self {
            menu_source: source(MENU_SOURCE_VAR),
            extras_source: source(EXTRAS_SOURCE_VAR),
        }
    }
}
