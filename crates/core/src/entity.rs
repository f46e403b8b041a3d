//! Entity trait: identity that outlives attribute values.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their ids are equal, regardless of
/// any other attribute.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison across possibly different snapshots.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
