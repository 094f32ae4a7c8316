use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use symptom_engine::ConditionProfile;
use utoipa::ToSchema;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::HealthGuardServer;

/// Catalog entry overview
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConditionSummary {
    #[schema(example = "Hypertension")]
    pub name: String,
    #[schema(example = 7)]
    pub keyword_count: usize,
    #[schema(example = 30)]
    pub base_risk: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AgeRuleResponse {
    pub min_age: u32,
    pub bonus: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenderRuleResponse {
    #[schema(example = "Female")]
    pub gender: String,
    pub bonus: u32,
}

/// Full catalog entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConditionDetail {
    pub name: String,
    pub keywords: Vec<String>,
    pub age_rule: Option<AgeRuleResponse>,
    pub gender_rule: Option<GenderRuleResponse>,
    pub base_risk: u32,
    pub preventive_measures: Vec<String>,
}

impl From<&ConditionProfile> for ConditionSummary {
    fn from(profile: &ConditionProfile) -> Self {
        Self {
            name: profile.name.clone(),
            keyword_count: profile.keywords.len(),
            base_risk: profile.base_risk,
        }
    }
}

impl From<&ConditionProfile> for ConditionDetail {
    fn from(profile: &ConditionProfile) -> Self {
        Self {
            name: profile.name.clone(),
            keywords: profile.keywords.clone(),
            age_rule: profile.age_rule.map(|rule| AgeRuleResponse {
                min_age: rule.min_age,
                bonus: rule.bonus,
            }),
            gender_rule: profile.gender_rule.map(|rule| GenderRuleResponse {
                gender: rule.gender.to_string(),
                bonus: rule.bonus,
            }),
            base_risk: profile.base_risk,
            preventive_measures: profile.preventive_measures.clone(),
        }
    }
}

/// List the catalog in scoring order
#[utoipa::path(
    get,
    path = "/api/conditions",
    tag = "conditions",
    responses(
        (status = 200, description = "Conditions listed", body = Vec<ConditionSummary>)
    )
)]
pub async fn list_conditions(
    State(server): State<HealthGuardServer>,
) -> Result<Json<ApiResponse<Vec<ConditionSummary>>>, ApiError> {
    let conditions = server
        .engine
        .catalog()
        .iter()
        .map(ConditionSummary::from)
        .collect();

    Ok(Json(api_success(conditions)))
}

/// Look up one condition by its exact name
#[utoipa::path(
    get,
    path = "/api/conditions/{name}",
    tag = "conditions",
    params(
        ("name" = String, Path, description = "Condition name, URL-encoded")
    ),
    responses(
        (status = 200, description = "Condition found", body = ConditionDetail),
        (status = 404, description = "Unknown condition", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn get_condition(
    State(server): State<HealthGuardServer>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ConditionDetail>>, ApiError> {
    let profile = server
        .engine
        .catalog()
        .get(&name)
        .ok_or_else(|| ApiError::not_found(format!("condition '{name}'")))?;

    Ok(Json(api_success(ConditionDetail::from(profile))))
}
