//! service - the request-handling layer.
//!
//! Inbound calls are named commands dispatched to handler functions. Each
//! handler receives a `Context<A>` with the input payload and the
//! application state.
//!
//! ```ignore
//! use std::sync::Arc;
//! use advert_api::{advert_service, service, Adverts};
//!
//! let service = Arc::new(advert_service(Adverts::new(store, notifier)));
//!
//! // Direct dispatch
//! let created = service.dispatch("advert.create", json!({ "title": "Sofa" }))?;
//!
//! // HTTP transport (requires "http" feature)
//! service::serve(service, "0.0.0.0:3000").await?;
//! ```

mod context;
mod error;
#[allow(clippy::module_inception)]
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};
