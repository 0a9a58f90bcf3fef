//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their value. Two value objects with the same value are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one, construct
/// a new one from new input.
///
/// Some value objects keep structured parts next to a canonical representation (an
/// address keeps block/street/unit/postal code next to its joined string). Equality and
/// hashing for those are defined over the canonical representation only, so the trait
/// exposes it.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Phone {
///     value: String,
/// }
///
/// impl ValueObject for Phone {
///     fn canonical(&self) -> &str {
///         &self.value
///     }
/// }
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display {
    /// The canonical string that equality and hashing are defined over.
    fn canonical(&self) -> &str;

    /// Whether the value is hidden from non-owners.
    fn is_private(&self) -> bool {
        false
    }
}
