//! Core traits shared across layers.

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier, if one has been assigned.
    fn id(&self) -> Option<ID>;
}

/// Trait for mapping between domain entities and DTOs.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: From) -> To;
}
