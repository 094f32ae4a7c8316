//! HTTP surface for HealthGuard Engine
//!
//! Wraps [`symptom_engine`] in an axum router with JSON error envelopes,
//! request logging and Swagger UI at `/docs`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

pub use error::*;
pub use server::{HealthGuardServer, ServerConfig};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_app(server: HealthGuardServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
