//! Postal address value object.
//!
//! Addresses are free text. Up to three comma-terminated prefix segments are read as
//! block, street and unit; whatever follows lands in the next unfilled slot (normally
//! the postal code). Nothing beyond non-emptiness is validated.

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use addressbook_core::{DomainError, DomainResult, ValueObject};

use crate::record::PrivateValueRecord;

/// Number of comma-terminated segments read before the remainder becomes the last field.
const MAX_DELIMITED_FIELDS: usize = 3;

/// Structured components of an address, in canonical order.
///
/// Comma-terminated segments keep their trailing comma, so joining the present parts
/// with single spaces reproduces the conventional written form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub block: Option<String>,
    pub street: Option<String>,
    pub unit: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressParts {
    /// Split an already-trimmed address into its four slots.
    ///
    /// Filled slots are always contiguous from `block`; a missing comma leaves the
    /// remaining slots `None`.
    pub fn parse(trimmed: &str) -> Self {
        let mut slots: [Option<String>; 4] = Default::default();
        let mut filled = 0;
        let mut rest = trimmed;

        while filled < MAX_DELIMITED_FIELDS {
            let Some(comma) = rest.find(',') else {
                break;
            };
            slots[filled] = Some(rest[..=comma].to_string());
            filled += 1;
            rest = &rest[comma + 1..];
            rest = rest.strip_prefix(' ').unwrap_or(rest);
        }

        let tail = rest.trim();
        if !tail.is_empty() {
            slots[filled] = Some(tail.to_string());
        }

        let [block, street, unit, postal_code] = slots;
        Self {
            block,
            street,
            unit,
            postal_code,
        }
    }

    /// Present parts in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.block, &self.street, &self.unit, &self.postal_code]
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Present parts joined with single spaces.
    pub fn join(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

/// A person's address in the address book.
///
/// Guarantees: immutable; non-empty; `as_str()` is always the join of `parts()`.
/// Equality and hashing only look at the canonical string, not at the privacy flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PrivateValueRecord", into = "PrivateValueRecord")]
pub struct Address {
    parts: AddressParts,
    value: String,
    private: bool,
}

impl Address {
    pub const EXAMPLE: &'static str = "123, some street";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Person addresses can be in any format";

    /// Validate and decompose a raw address.
    pub fn new(raw: &str, private: bool) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(DomainError::validation(Self::MESSAGE_CONSTRAINTS));
        }

        let parts = AddressParts::parse(trimmed);
        let value = parts.join();

        Ok(Self {
            parts,
            value,
            private,
        })
    }

    /// Whether `test` is acceptable as an address. Any non-empty text is.
    pub fn is_valid(test: &str) -> bool {
        !test.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn parts(&self) -> &AddressParts {
        &self.parts
    }

    pub fn block(&self) -> Option<&str> {
        self.parts.block.as_deref()
    }

    pub fn street(&self) -> Option<&str> {
        self.parts.street.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.parts.unit.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.parts.postal_code.as_deref()
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl ValueObject for Address {
    fn canonical(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.private
    }
}

/// Parses a public address.
impl FromStr for Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, false)
    }
}

impl TryFrom<PrivateValueRecord> for Address {
    type Error = DomainError;

    fn try_from(record: PrivateValueRecord) -> Result<Self, Self::Error> {
        Self::new(&record.value, record.private)
    }
}

impl From<Address> for PrivateValueRecord {
    fn from(address: Address) -> Self {
        Self {
            value: address.value,
            private: address.private,
        }
    }
}
