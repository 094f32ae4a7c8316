use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use symptom_engine::validation::{MAX_AGE, MIN_AGE};
use symptom_engine::{AssessmentRequest, AssessmentResult, CandidateScore, EngineError, Gender};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::HealthGuardServer;
use crate::validation::RequestValidation;

/// Age as submitted by clients; web forms often post numbers as strings
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

/// Symptoms as a list or a single comma-separated string
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SymptomInput {
    List(Vec<String>),
    Text(String),
}

impl SymptomInput {
    /// Splits comma-separated text, dropping empty pieces. List entries
    /// are passed through untouched so the engine boundary can reject blanks.
    pub fn into_symptoms(self) -> Vec<String> {
        match self {
            SymptomInput::List(symptoms) => symptoms,
            SymptomInput::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Body of a prediction request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PredictRequest {
    #[schema(value_type = u32, example = 25)]
    pub age: Option<AgeInput>,
    #[schema(example = "Female")]
    pub gender: Option<String>,
    #[schema(value_type = Vec<String>, example = json!(["burning urination", "frequent urination"]))]
    pub symptoms: Option<SymptomInput>,
}

impl PredictRequest {
    fn parsed_age(&self) -> Result<u32, ApiError> {
        let age = match &self.age {
            Some(AgeInput::Number(n)) => *n,
            Some(AgeInput::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| ApiError::field("age", "age must be a whole number"))?,
            None => return Err(ApiError::field("age", "age is required")),
        };

        crate::validate_range!(
            "age",
            age,
            i64::from(MIN_AGE),
            i64::from(MAX_AGE),
            format!("age must be between {MIN_AGE} and {MAX_AGE}")
        );
        u32::try_from(age).map_err(|_| ApiError::field("age", "age is out of range"))
    }

    fn parsed_gender(&self) -> Result<Gender, ApiError> {
        let raw = self
            .gender
            .as_deref()
            .ok_or_else(|| ApiError::field("gender", "gender is required"))?;
        raw.parse::<Gender>().map_err(|e| match e {
            EngineError::InvalidInput(message) => ApiError::field("gender", message),
            other => ApiError::field("gender", other.to_string()),
        })
    }

    fn parsed_fields(&self) -> Result<(u32, Gender), ApiError> {
        let age = self.parsed_age()?;
        let gender = self.parsed_gender()?;
        crate::validate_present!("symptoms", self.symptoms, "symptoms is required");
        Ok((age, gender))
    }

    /// Validate and convert into engine input
    pub fn into_assessment(self) -> Result<AssessmentRequest, ApiError> {
        let (age, gender) = self.parsed_fields()?;
        let symptoms = self
            .symptoms
            .map(SymptomInput::into_symptoms)
            .unwrap_or_default();

        Ok(AssessmentRequest {
            age,
            gender,
            symptoms,
        })
    }
}

impl RequestValidation for PredictRequest {
    fn validate(&self) -> Result<(), ApiError> {
        self.parsed_fields().map(|_| ())
    }
}

/// Assessment outcome returned to clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[schema(example = "Urinary Tract Infection (UTI)")]
    pub disease: String,
    #[schema(example = 56)]
    pub risk_score: u32,
    #[schema(example = 39)]
    pub confidence: u32,
    pub preventive: Vec<String>,
}

impl From<AssessmentResult> for PredictionResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            disease: result.disease,
            risk_score: result.risk_score,
            confidence: result.confidence,
            preventive: result.preventive,
        }
    }
}

/// One scored condition in a differential
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub disease: String,
    pub match_count: usize,
    pub match_ratio: f64,
    pub risk_score: u32,
    pub confidence: u32,
    pub composite_score: f64,
}

impl From<CandidateScore> for CandidateResponse {
    fn from(candidate: CandidateScore) -> Self {
        Self {
            disease: candidate.disease,
            match_count: candidate.match_count,
            match_ratio: candidate.match_ratio,
            risk_score: candidate.risk_score,
            confidence: candidate.confidence,
            composite_score: candidate.composite_score,
        }
    }
}

/// Winning assessment plus every matched condition, best first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DifferentialResponse {
    pub result: PredictionResponse,
    pub differential: Vec<CandidateResponse>,
}

/// Score symptoms against the condition catalog
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Assessment produced", body = PredictionResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn predict(
    State(server): State<HealthGuardServer>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PredictionResponse>>, ApiError> {
    let Json(payload) = payload?;
    let request = payload.into_assessment()?;

    let result = server.engine.assess_checked(&request)?;
    info!(
        disease = %result.disease,
        risk_score = result.risk_score,
        confidence = result.confidence,
        symptom_count = request.symptoms.len(),
        "Assessment completed"
    );

    Ok(Json(api_success(result.into())))
}

/// Score symptoms and return the ranked differential
#[utoipa::path(
    post,
    path = "/api/predict/differential",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Differential produced", body = DifferentialResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn predict_differential(
    State(server): State<HealthGuardServer>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<DifferentialResponse>>, ApiError> {
    let Json(payload) = payload?;
    let request = payload.into_assessment()?;

    let result = server.engine.assess_checked(&request)?;
    let differential: Vec<CandidateResponse> = server
        .engine
        .differential(&request)
        .into_iter()
        .map(CandidateResponse::from)
        .collect();
    debug!(candidates = differential.len(), "Differential computed");

    Ok(Json(api_success(DifferentialResponse {
        result: result.into(),
        differential,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RequestValidation;

    fn request(json: serde_json::Value) -> PredictRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_comma_separated_symptoms_are_split() {
        let symptoms = SymptomInput::Text(" fever, cough ,,headache ".to_string()).into_symptoms();
        assert_eq!(symptoms, vec!["fever", "cough", "headache"]);
    }

    #[test]
    fn test_list_symptoms_pass_through() {
        let symptoms = SymptomInput::List(vec!["fever".to_string(), " ".to_string()]).into_symptoms();
        assert_eq!(symptoms.len(), 2);
    }

    #[test]
    fn test_string_age_is_accepted() {
        let assessment = request(serde_json::json!({
            "age": "45",
            "gender": "male",
            "symptoms": "chest pain"
        }))
        .into_assessment()
        .unwrap();

        assert_eq!(assessment.age, 45);
        assert_eq!(assessment.gender, Gender::Male);
        assert_eq!(assessment.symptoms, vec!["chest pain"]);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(request(serde_json::json!({"gender": "Male", "symptoms": []}))
            .into_assessment()
            .is_err());
        assert!(request(serde_json::json!({"age": 30, "symptoms": []}))
            .into_assessment()
            .is_err());
        assert!(request(serde_json::json!({"age": 30, "gender": "Male"}))
            .into_assessment()
            .is_err());
    }

    #[test]
    fn test_out_of_range_age_is_rejected() {
        for age in [0, -4, 151] {
            let result = request(serde_json::json!({
                "age": age,
                "gender": "Female",
                "symptoms": ["fever"]
            }))
            .into_assessment();
            assert!(matches!(result, Err(ApiError::Validation { .. })), "age {age}");
        }
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let result = request(serde_json::json!({
            "age": 30,
            "gender": "unknown",
            "symptoms": ["fever"]
        }))
        .into_assessment();

        match result {
            Err(ApiError::Validation { message, field_errors: Some(fields) }) => {
                assert_eq!(message, "gender must be one of Male, Female, Other (got 'unknown')");
                assert_eq!(fields["gender"], vec![message.clone()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validate_matches_conversion() {
        let valid = request(serde_json::json!({"age": 30, "gender": "Other", "symptoms": []}));
        assert!(valid.validate().is_ok());
        assert!(valid.into_assessment().is_ok());

        let invalid = request(serde_json::json!({"age": 30, "gender": "Other"}));
        assert!(invalid.validate().is_err());
        assert!(invalid.into_assessment().is_err());
    }
}
