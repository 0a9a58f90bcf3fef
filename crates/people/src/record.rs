use serde::{Deserialize, Serialize};

/// Stored shape shared by the private-aware value objects.
///
/// Deserialization goes back through the owning type's constructor, so stored data is
/// validated exactly like user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateValueRecord {
    pub value: String,
    #[serde(default)]
    pub private: bool,
}
