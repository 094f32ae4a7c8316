pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{conditions, health, predict},
    openapi,
    server::HealthGuardServer,
};

/// Create health check routes
pub fn health_routes() -> Router<HealthGuardServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create assessment routes
pub fn predict_routes() -> Router<HealthGuardServer> {
    Router::new()
        .route(paths::predict::PREDICT, post(predict::predict))
        .route(paths::predict::DIFFERENTIAL, post(predict::predict_differential))
}

/// Create read-only catalog routes
pub fn condition_routes() -> Router<HealthGuardServer> {
    Router::new()
        .route(paths::conditions::CONDITIONS, get(conditions::list_conditions))
        .route(paths::conditions::CONDITION_BY_NAME, get(conditions::get_condition))
}

/// Combine all routes
pub fn create_routes() -> Router<HealthGuardServer> {
    Router::new()
        .merge(health_routes())
        .merge(predict_routes())
        .merge(condition_routes())
        .merge(openapi::create_docs_routes())
}
