//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Collections that only need to find records by identity (the recycle bin,
/// for instance) are written against this trait rather than a concrete record.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
