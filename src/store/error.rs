use thiserror::Error;

/// Error type for advert storage operations.
///
/// Lookup misses are `NotFound` and nothing else; infrastructure trouble is
/// reported through `Unavailable` or `Serde`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No advert with this id.
    #[error("advert not found: {id}")]
    NotFound { id: String },

    /// The advert has already left `Pending`.
    #[error("advert already confirmed: {id}")]
    AlreadyConfirmed { id: String },

    /// The creation payload was rejected.
    #[error("invalid advert: {0}")]
    InvalidInput(String),

    /// Optimistic concurrency conflict in the backend.
    #[error("concurrency conflict on advert {id} (expected version {expected}, actual {actual})")]
    ConcurrencyConflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// Serialization/deserialization error.
    #[error("record serialization error: {0}")]
    Serde(String),

    /// The backend could not be reached or is in a bad state.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// True for failures that say nothing about the record itself.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            StoreError::Serde(_)
                | StoreError::Unavailable(_)
                | StoreError::ConcurrencyConflict { .. }
        )
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
