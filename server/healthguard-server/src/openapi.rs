use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::HealthGuardServer;

/// OpenAPI documentation for the public API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,
        crate::handlers::predict::predict,
        crate::handlers::predict::predict_differential,
        crate::handlers::conditions::list_conditions,
        crate::handlers::conditions::get_condition,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::handlers::predict::AgeInput,
            crate::handlers::predict::SymptomInput,
            crate::handlers::predict::PredictRequest,
            crate::handlers::predict::PredictionResponse,
            crate::handlers::predict::CandidateResponse,
            crate::handlers::predict::DifferentialResponse,
            crate::handlers::conditions::ConditionSummary,
            crate::handlers::conditions::ConditionDetail,
            crate::handlers::conditions::AgeRuleResponse,
            crate::handlers::conditions::GenderRuleResponse,
            crate::error::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health and version"),
        (name = "predict", description = "Rules-based symptom assessment"),
        (name = "conditions", description = "Condition catalog lookup"),
    ),
    info(
        title = "HealthGuard Engine API",
        version = "0.1.0",
        description = "Rules-based symptom triage. Results are informational and not a medical diagnosis.",
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
pub fn create_docs_routes() -> Router<HealthGuardServer> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
