//! Context passed to command handlers.
//!
//! Carries the parsed input and a reference to the application state.
//! Handlers access everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;

/// The context passed to every command handler.
///
/// Generic over `A`, the application state the service was built with.
pub struct Context<'a, A> {
    /// Raw JSON input from the request.
    input: Value,
    /// Reference to the application state.
    app: &'a A,
}

impl<'a, A> Context<'a, A> {
    pub(crate) fn new(input: Value, app: &'a A) -> Self {
        Self { input, app }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get the raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// Get a reference to the application state.
    pub fn app(&self) -> &A {
        self.app
    }

    /// Check if the raw input contains a non-null field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some_and(|v| !v.is_null())
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }
}
