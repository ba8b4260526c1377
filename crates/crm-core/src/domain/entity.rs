//! Domain Layer - Core Entity Trait
//!
//! Contract shared by every record that carries its own identifier.

use thiserror::Error;

/// Core trait for identified records (leads, voice notes)
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Eq + ?Sized;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Returns a copy of `items` without the record whose id equals `id`.
///
/// Order of the remaining records is preserved. An unknown id yields an
/// unchanged copy.
pub fn remove_by_id<T: Entity>(items: &[T], id: &T::Id) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
