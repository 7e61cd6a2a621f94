//! Error types for advert command handlers.

use std::error::Error;

use thiserror::Error;

use crate::store::StoreError;

/// Error type for command handler operations.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No handler registered for this command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Guard rejected the command (input validation failed).
    #[error("guard rejected command: {0}")]
    GuardRejected(String),
    /// Business logic rejected the command.
    #[error("rejected: {0}")]
    Rejected(String),
    /// Advert not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// The command conflicts with the advert's current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Storage infrastructure failure.
    #[error("storage error: {0}")]
    Store(#[source] StoreError),
    /// Other error.
    #[error("handler error: {0}")]
    Other(#[source] Box<dyn Error + Send + Sync>),
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => HandlerError::NotFound(id),
            StoreError::AlreadyConfirmed { id } => {
                HandlerError::Conflict(format!("advert {} is already confirmed", id))
            }
            StoreError::InvalidInput(msg) => HandlerError::Rejected(msg),
            other => HandlerError::Store(other),
        }
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Rejected(_) => 422,
            HandlerError::NotFound(_) => 404,
            HandlerError::Conflict(_) => 409,
            HandlerError::Store(_) => 500,
            HandlerError::Other(_) => 500,
        }
    }

    /// Message safe to hand back to a caller.
    ///
    /// Server-side failures are reported generically; the detail goes to the log.
    pub fn public_message(&self) -> String {
        if self.status_code() >= 500 {
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}
