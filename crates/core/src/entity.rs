//! Entity trait: identity + continuity.

/// Entity marker + minimal interface.
///
/// Catalog records are immutable, so identity is all an entity has to expose.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
