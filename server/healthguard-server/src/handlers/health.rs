use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::HealthGuardServer;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status
    #[schema(example = "healthy")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2026-01-15T10:30:00Z")]
    pub timestamp: String,
    /// API version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Seconds since the server state was built
    #[schema(example = 3600)]
    pub uptime_seconds: u64,
    /// Number of conditions in the loaded catalog
    #[schema(example = 15)]
    pub conditions_loaded: usize,
}

/// Version information response
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    #[schema(example = "HealthGuard Engine")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "development")]
    pub environment: String,
    /// Where the condition catalog came from
    #[schema(example = "builtin")]
    pub catalog_source: String,
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<HealthGuardServer>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: server.uptime_seconds(),
        conditions_loaded: server.engine.catalog().len(),
    };

    Ok(Json(api_success(response)))
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "health",
    responses(
        (status = 200, description = "Version information retrieved successfully", body = VersionResponse)
    )
)]
pub async fn version_info(
    State(server): State<HealthGuardServer>,
) -> Result<Json<ApiResponse<VersionResponse>>, ApiError> {
    let catalog_source = match &server.config.engine.catalog_path {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };

    let response = VersionResponse {
        name: "HealthGuard Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: server.config.environment.clone(),
        catalog_source,
    };

    Ok(Json(api_success(response)))
}
