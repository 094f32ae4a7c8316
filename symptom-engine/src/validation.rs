//! Boundary checks for assessment requests
//!
//! The scorer itself accepts anything; these checks reject malformed requests
//! before they reach it.

use crate::error::{EngineError, EngineResult};
use crate::types::AssessmentRequest;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 150;
pub const MAX_SYMPTOMS: usize = 50;
pub const MAX_SYMPTOM_LENGTH: usize = 200;

/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the age is outside
/// `MIN_AGE..=MAX_AGE`, there are more than [`MAX_SYMPTOMS`] symptoms, or a
/// symptom is blank or longer than [`MAX_SYMPTOM_LENGTH`] characters.
pub fn validate_request(request: &AssessmentRequest) -> EngineResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&request.age) {
        return Err(EngineError::invalid_input(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }

    if request.symptoms.len() > MAX_SYMPTOMS {
        return Err(EngineError::invalid_input(format!(
            "at most {MAX_SYMPTOMS} symptoms are accepted"
        )));
    }

    for (position, symptom) in request.symptoms.iter().enumerate() {
        let trimmed = symptom.trim();
        if trimmed.is_empty() {
            return Err(EngineError::invalid_input(format!(
                "symptom at position {position} is blank"
            )));
        }
        if trimmed.chars().count() > MAX_SYMPTOM_LENGTH {
            return Err(EngineError::invalid_input(format!(
                "symptom at position {position} exceeds {MAX_SYMPTOM_LENGTH} characters"
            )));
        }
    }

    Ok(())
}
