//! Error types for the Vitrine engine.

/// Errors that can occur while assembling a search document.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A structurally required field is missing from the entity snapshot.
    ///
    /// Raised when an entity cannot legally be indexed at all, e.g. a
    /// product with zero category memberships. The caller is expected to
    /// log the failure and continue with the next entity.
    #[error("Required field missing: {field}")]
    MissingField {
        /// Index field the entity could not supply
        field: String,
    },

    /// JSON rendering of a finished document failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Vitrine operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a missing-field error for the given index field name.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    /// Returns whether this error is scoped to a single entity's build.
    ///
    /// Entity-scoped failures must not stop the surrounding indexing pass;
    /// the pipeline logs them and moves on to the next entity.
    pub fn is_entity_scoped(&self) -> bool {
        match self {
            Error::MissingField { .. } => true,
            Error::Serialization(_) => false,
        }
    }
}
