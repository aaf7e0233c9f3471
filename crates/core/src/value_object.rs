//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: two value objects holding the same
//! values are the same value. In this workspace the canonical SKU and the
//! expiration date are value objects, while an inventory item is an entity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one (which re-runs its validation).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ExpirationDate(NaiveDate);
///
/// impl ValueObject for ExpirationDate {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
