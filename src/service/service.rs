//! Service - command handler registry and dispatch.
//!
//! `Service<A>` holds the application state and a set of named command
//! handlers. Each handler receives a `Context<A>` and returns
//! `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```
//! use advert_api::service::Service;
//! use serde_json::json;
//!
//! let service = Service::new(()).command("ping", |_ctx| Ok(json!({ "pong": true })));
//! let result = service.dispatch("ping", json!({})).unwrap();
//! assert_eq!(result, json!({ "pong": true }));
//! ```

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::context::Context;
use super::error::HandlerError;

type Guard<A> = Box<dyn Fn(&Context<A>) -> bool + Send + Sync>;
type Handle<A> = Box<dyn Fn(&Context<A>) -> Result<Value, HandlerError> + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler<A> {
    guard: Option<Guard<A>>,
    handle: Handle<A>,
}

/// Routes named commands to handler functions.
pub struct Service<A> {
    app: A,
    handlers: HashMap<String, CommandHandler<A>>,
}

impl<A: Send + Sync + 'static> Service<A> {
    /// Create a new service around the given application state.
    pub fn new(app: A) -> Self {
        Self {
            app,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern - returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<A>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<A>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<A>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input, looks up the handler, runs the
    /// guard (if any), then calls the handler.
    pub fn dispatch(&self, command: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(input, &self.app);

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                debug!(command, "guard rejected command");
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        (handler.handle)(&ctx)
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a reference to the application state.
    pub fn app(&self) -> &A {
        &self.app
    }
}
