//! Domain error type shared by all crates.

use crate::types::DbId;

/// Domain-level errors.
///
/// The API layer maps these onto HTTP statuses: `NotFound` -> 404,
/// `Validation` -> 400, `Internal` -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation (missing field, empty patch, bad enum value).
    #[error("{0}")]
    Validation(String),

    /// An invariant was violated internally.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` on the given entity.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for a `Validation` error from anything stringy.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Convenience alias for fallible domain operations.
pub type CoreResult<T> = Result<T, CoreError>;
