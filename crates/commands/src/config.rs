//! Runtime configuration for the command layer.

use serde::{Deserialize, Serialize};

use addressbook_people::NameOrder;

/// Environment variable selecting how `sort` compares names.
pub const NAME_ORDER_ENV: &str = "ADDRESSBOOK_NAME_ORDER";

/// Settings commands read at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookConfig {
    #[serde(default)]
    pub name_order: NameOrder,
}

impl AddressBookConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (key -> value).
    ///
    /// Unset keys use defaults; unparseable values are logged and also fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let name_order = match lookup(NAME_ORDER_ENV) {
            None => NameOrder::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    key = NAME_ORDER_ENV,
                    value = %raw,
                    error = %err,
                    "invalid name order; using default"
                );
                NameOrder::default()
            }),
        };

        Self { name_order }
    }
}
