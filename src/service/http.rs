//! HTTP transport - maps REST routes onto advert command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /adverts/v1/create` - `advert.create`, answers `201 {"id": ...}`.
//! - `PUT /adverts/v1/confirm` - `advert.confirm`.
//! - `GET /adverts/v1/all` - `advert.all`, open to any origin.
//! - `GET /adverts/v1/:id` - `advert.get`.
//! - `GET /health` - storage health plus the registered commands.
//!
//! Failures answer `{"error": ...}` with the status from
//! [`HandlerError::status_code`]; 5xx details stay in the log.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use super::error::HandlerError;
use super::service::Service;
use crate::app::Adverts;
use crate::bus::Publisher;
use crate::handlers::{all, confirm, create, get as get_one};
use crate::store::RecordStore;

type SharedService<S, P> = Arc<Service<Adverts<S, P>>>;

/// Build an axum `Router` serving the advert API.
pub fn router<S, P>(service: SharedService<S, P>) -> Router
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler::<S, P>))
        .route("/adverts/v1/create", post(create_handler::<S, P>))
        .route("/adverts/v1/confirm", put(confirm_handler::<S, P>))
        .route("/adverts/v1/all", get(all_handler::<S, P>).layer(cors))
        .route("/adverts/v1/:id", get(get_handler::<S, P>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the advert API over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S, P>(service: SharedService<S, P>, addr: &str) -> Result<(), std::io::Error>
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health_handler<S, P>(State(service): State<SharedService<S, P>>) -> Response
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    let commands = service.commands();
    match service.app().store().health() {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "ok": true, "storage": "healthy", "commands": commands })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ok": false, "storage": "unhealthy", "commands": commands })),
            )
                .into_response()
        }
    }
}

async fn create_handler<S, P>(
    State(service): State<SharedService<S, P>>,
    Json(input): Json<Value>,
) -> Response
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    respond(
        create::COMMAND,
        StatusCode::CREATED,
        service.dispatch(create::COMMAND, input),
    )
}

async fn confirm_handler<S, P>(
    State(service): State<SharedService<S, P>>,
    Json(input): Json<Value>,
) -> Response
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    respond(
        confirm::COMMAND,
        StatusCode::OK,
        service.dispatch(confirm::COMMAND, input),
    )
}

async fn get_handler<S, P>(
    State(service): State<SharedService<S, P>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    respond(
        get_one::COMMAND,
        StatusCode::OK,
        service.dispatch(get_one::COMMAND, json!({ "id": id })),
    )
}

async fn all_handler<S, P>(State(service): State<SharedService<S, P>>) -> Response
where
    S: RecordStore + 'static,
    P: Publisher + 'static,
{
    respond(
        all::COMMAND,
        StatusCode::OK,
        service.dispatch(all::COMMAND, json!({})),
    )
}

fn respond(command: &str, success: StatusCode, result: Result<Value, HandlerError>) -> Response {
    match result {
        Ok(value) => (success, Json(value)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(command, error = %e, "command failed");
            }
            let body = json!({ "error": e.public_message() });
            (status, Json(body)).into_response()
        }
    }
}
