pub mod generate;
pub mod health;
pub mod metrics;

use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use generate::ApiError;

/// Request bodies are small JSON documents; 64 KB is generous.
///
/// Enforced by the body extractor, so an oversized body is reported through
/// `ApiError` like any other unreadable body.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Page UI, API and health routes, without middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Static UI (embedded at compile time)
        .route("/", get(|| async { Html(include_str!("../../static/index.html")) }))
        .route("/health", get(health::health_check))
        .route("/api/generate-recipe", post(generate::generate_recipe))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}

/// Apply tracing, compression and CORS around the panic boundary.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Panicked.into_response()
}
