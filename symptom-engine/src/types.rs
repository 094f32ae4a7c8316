use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Disease name reported when no condition matched any symptom
pub const NO_MATCH_DISEASE: &str = "No specific condition identified";

/// Risk score reported alongside [`NO_MATCH_DISEASE`]
pub const FALLBACK_RISK_SCORE: u32 = 15;

/// Confidence reported alongside [`NO_MATCH_DISEASE`]
pub const FALLBACK_CONFIDENCE: u32 = 20;

/// Generic advice returned when no condition matched
pub const FALLBACK_PREVENTIVE: [&str; 5] = [
    "Maintain a balanced diet with fruits and vegetables",
    "Exercise at least 30 minutes daily",
    "Stay hydrated – drink 8 glasses of water",
    "Get 7-8 hours of quality sleep",
    "Schedule a general health checkup with your doctor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(EngineError::invalid_input(format!(
                "gender must be one of Male, Female, Other (got '{s}')"
            ))),
        }
    }
}

/// One assessment call's input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub age: u32,
    pub gender: Gender,
    pub symptoms: Vec<String>,
}

impl AssessmentRequest {
    pub fn new<I, S>(age: u32, gender: Gender, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            age,
            gender,
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Best-matching condition for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub disease: String,
    pub risk_score: u32,
    pub confidence: u32,
    pub preventive: Vec<String>,
}

impl AssessmentResult {
    pub fn fallback() -> Self {
        Self {
            disease: NO_MATCH_DISEASE.to_string(),
            risk_score: FALLBACK_RISK_SCORE,
            confidence: FALLBACK_CONFIDENCE,
            preventive: FALLBACK_PREVENTIVE.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.disease == NO_MATCH_DISEASE
    }
}

/// How a single matched condition scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub disease: String,
    pub match_count: usize,
    pub match_ratio: f64,
    /// Risk before rounding and the cap
    pub unclamped_risk: f64,
    pub risk_score: u32,
    pub confidence: u32,
    pub composite_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parses_case_insensitively() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
    }

    #[test]
    fn test_gender_rejects_unknown_values() {
        let err = "unknown".parse::<Gender>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_gender_serializes_as_title_case() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Female\"");
        let parsed: Gender = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
        assert!(serde_json::from_str::<Gender>("\"female\"").is_err());
    }

    #[test]
    fn test_fallback_result() {
        let result = AssessmentResult::fallback();
        assert!(result.is_fallback());
        assert_eq!(result.risk_score, 15);
        assert_eq!(result.confidence, 20);
        assert_eq!(result.preventive.len(), 5);
        assert_eq!(result.preventive[0], "Maintain a balanced diet with fruits and vegetables");
    }

    #[test]
    fn test_result_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(AssessmentResult::fallback()).unwrap();
        assert_eq!(json["riskScore"], 15);
        assert_eq!(json["confidence"], 20);
        assert_eq!(json["disease"], NO_MATCH_DISEASE);
        assert!(json.get("risk_score").is_none());
    }
}
