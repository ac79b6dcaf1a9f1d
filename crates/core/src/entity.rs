//! Entity trait: identity + continuity across state changes.
//!
//! The in-memory collections (catalog, customer directory, order store) keep
//! entities in insertion order and look them up by id through the helpers here.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// First entity in `entities` with the given id.
pub fn find_by_id<'a, E: Entity>(entities: &'a [E], id: &E::Id) -> Option<&'a E> {
    entities.iter().find(|e| e.id() == id)
}

/// Index of the entity with the given id.
pub fn position_by_id<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}
