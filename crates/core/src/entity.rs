//! Entity trait: records identified by a stable id.

/// A domain record with a stable identity.
///
/// Collections of entities are keyed by `Id`; store lookup helpers are
/// generic over this trait rather than over a concrete record type.
pub trait Entity {
    /// Strongly-typed identifier the record is keyed by.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier the record is keyed by.
    fn id(&self) -> &Self::Id;
}
