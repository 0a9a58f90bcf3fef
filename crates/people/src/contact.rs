//! Single-valued contact details: name, phone and email.

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use addressbook_core::{DomainError, DomainResult, ValueObject};

use crate::record::PrivateValueRecord;

/// A person's name. Alphanumeric characters and spaces only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PrivateValueRecord", into = "PrivateValueRecord")]
pub struct Name {
    value: String,
    private: bool,
}

impl Name {
    pub const EXAMPLE: &'static str = "John Doe";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person names should be spaces or alphanumeric characters";

    pub fn is_valid(test: &str) -> bool {
        !test.is_empty() && test.chars().all(|c| c.is_alphanumeric() || c == ' ')
    }
}

/// A person's phone number. Digits only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PrivateValueRecord", into = "PrivateValueRecord")]
pub struct Phone {
    value: String,
    private: bool,
}

impl Phone {
    pub const EXAMPLE: &'static str = "123456789";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person phone numbers should only contain numbers";

    pub fn is_valid(test: &str) -> bool {
        !test.is_empty() && test.chars().all(|c| c.is_ascii_digit())
    }
}

/// A person's email: `local@domain`, both sides word characters and dots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PrivateValueRecord", into = "PrivateValueRecord")]
pub struct Email {
    value: String,
    private: bool,
}

impl Email {
    pub const EXAMPLE: &'static str = "valid@e.mail";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person emails should be 2 alphanumeric/period strings separated by '@'";

    pub fn is_valid(test: &str) -> bool {
        let is_segment = |s: &str| {
            !s.is_empty()
                && s
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        };
        match test.split_once('@') {
            Some((local, domain)) => is_segment(local) && is_segment(domain),
            None => false,
        }
    }
}

macro_rules! impl_contact_value {
    ($t:ty) => {
        impl $t {
            /// Validate a raw (untrimmed) value.
            pub fn new(raw: &str, private: bool) -> DomainResult<Self> {
                let trimmed = raw.trim();
                if !Self::is_valid(trimmed) {
                    return Err(DomainError::validation(Self::MESSAGE_CONSTRAINTS));
                }
                Ok(Self {
                    value: trimmed.to_string(),
                    private,
                })
            }

            pub fn as_str(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.private
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl Eq for $t {}

        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl ValueObject for $t {
            fn canonical(&self) -> &str {
                &self.value
            }

            fn is_private(&self) -> bool {
                self.private
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s, false)
            }
        }

        impl TryFrom<PrivateValueRecord> for $t {
            type Error = DomainError;

            fn try_from(record: PrivateValueRecord) -> Result<Self, Self::Error> {
                Self::new(&record.value, record.private)
            }
        }

        impl From<$t> for PrivateValueRecord {
            fn from(value: $t) -> Self {
                Self {
                    value: value.value,
                    private: value.private,
                }
            }
        }
    };
}

impl_contact_value!(Name);
impl_contact_value!(Phone);
impl_contact_value!(Email);
