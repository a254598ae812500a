//! HTTP surface: router, shared state, and handlers.

pub mod handler;
pub mod helpers;

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ai::CompletionBackend;
use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// Shared application state. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    pub fn new(config: AppConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate-summary", post(handler::generate_summary))
        .route("/health", get(handler::health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Turns a panic inside a handler into a 500 with the panic message as `detail`.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let cause = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    SummaryError::Internal(cause).into_response()
}
