//! Symptom scoring
//!
//! For every condition in catalog order the engine counts how many input
//! symptoms overlap one of its keywords, turns that into a risk score and a
//! confidence value, and keeps the condition with the highest weighted blend
//! of the two. A symptom overlaps a keyword when either string contains the
//! other, so "severe headache" matches "headache" and "pain" matches
//! "joint pain".

use std::sync::Arc;

use crate::catalog::{ConditionCatalog, ConditionProfile};
use crate::error::{CatalogError, EngineResult};
use crate::types::{AssessmentRequest, AssessmentResult, CandidateScore, Gender};
use crate::validation::validate_request;

/// Risk points granted for a full keyword match (`match_ratio == 1.0`)
pub const MATCH_RATIO_WEIGHT: f64 = 40.0;

/// Extra risk once at least this many symptoms match
pub const FIRST_STACK_THRESHOLD: usize = 3;

/// A second, stacking bonus once at least this many symptoms match
pub const SECOND_STACK_THRESHOLD: usize = 5;

pub const STACK_BONUS: u32 = 10;

pub const RISK_SCORE_CAP: u32 = 95;
pub const CONFIDENCE_CAP: u32 = 95;

/// Confidence points per matching symptom
pub const CONFIDENCE_PER_MATCH: f64 = 5.0;

pub const RISK_WEIGHT: f64 = 0.6;
pub const CONFIDENCE_WEIGHT: f64 = 0.4;

/// Trim and lowercase a symptom or keyword
pub fn normalize_symptom(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// Bidirectional substring test between a normalized symptom and keyword
pub fn symptom_matches(symptom: &str, keyword: &str) -> bool {
    symptom.contains(keyword) || keyword.contains(symptom)
}

/// Number of symptoms that overlap at least one keyword.
///
/// Each symptom counts at most once, however many keywords it overlaps.
pub fn count_matches(symptoms: &[String], keywords: &[String]) -> usize {
    symptoms
        .iter()
        .filter(|symptom| keywords.iter().any(|keyword| symptom_matches(symptom, keyword)))
        .count()
}

/// Stacking bonus for `match_count` matching symptoms: 0, 10 or 20
pub fn match_bonus(match_count: usize) -> u32 {
    let mut bonus = 0;
    if match_count >= FIRST_STACK_THRESHOLD {
        bonus += STACK_BONUS;
    }
    if match_count >= SECOND_STACK_THRESHOLD {
        bonus += STACK_BONUS;
    }
    bonus
}

/// Round half away from zero, then cap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_and_cap(value: f64, cap: u32) -> u32 {
    let rounded = value.round();
    if rounded <= 0.0 {
        0
    } else if rounded >= f64::from(cap) {
        cap
    } else {
        rounded as u32
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(count: usize) -> f64 {
    count as f64
}

/// Score one profile against already-normalized symptoms.
///
/// Returns `None` when no symptom matches, since such a profile can never be
/// selected.
pub fn score_profile(
    profile: &ConditionProfile,
    age: u32,
    gender: Gender,
    normalized_symptoms: &[String],
) -> Option<CandidateScore> {
    let match_count = count_matches(normalized_symptoms, &profile.keywords);
    if match_count == 0 || profile.keywords.is_empty() {
        return None;
    }

    let match_ratio = as_f64(match_count) / as_f64(profile.keywords.len());

    let unclamped_risk = f64::from(profile.base_risk)
        + match_ratio * MATCH_RATIO_WEIGHT
        + f64::from(profile.age_bonus(age))
        + f64::from(profile.gender_bonus(gender))
        + f64::from(match_bonus(match_count));

    let risk_score = round_and_cap(unclamped_risk, RISK_SCORE_CAP);
    let confidence = round_and_cap(
        match_ratio * 100.0 + as_f64(match_count) * CONFIDENCE_PER_MATCH,
        CONFIDENCE_CAP,
    );
    let composite_score =
        f64::from(risk_score) * RISK_WEIGHT + f64::from(confidence) * CONFIDENCE_WEIGHT;

    Some(CandidateScore {
        disease: profile.name.clone(),
        match_count,
        match_ratio,
        unclamped_risk,
        risk_score,
        confidence,
        composite_score,
    })
}

/// Rules-based condition scorer over a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct SymptomEngine {
    catalog: Arc<ConditionCatalog>,
}

impl SymptomEngine {
    pub fn new(catalog: Arc<ConditionCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the bundled catalog
    ///
    /// # Errors
    ///
    /// Only fails if the bundled catalog does not load.
    pub fn builtin() -> Result<Self, CatalogError> {
        ConditionCatalog::builtin().map(Self::new)
    }

    pub fn catalog(&self) -> &ConditionCatalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<ConditionCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Pick the best-matching condition.
    ///
    /// Profiles are visited in catalog order and a later profile only takes
    /// the lead with a strictly greater composite score, so ties go to the
    /// earlier profile. Nothing matching yields [`AssessmentResult::fallback`].
    pub fn assess(&self, request: &AssessmentRequest) -> AssessmentResult {
        let symptoms = Self::normalize(request);

        let mut best: Option<(&ConditionProfile, CandidateScore)> = None;
        for profile in self.catalog.iter() {
            let Some(candidate) = score_profile(profile, request.age, request.gender, &symptoms)
            else {
                continue;
            };

            let takes_lead = best
                .as_ref()
                .map_or(true, |(_, leader)| candidate.composite_score > leader.composite_score);
            if takes_lead {
                best = Some((profile, candidate));
            }
        }

        match best {
            Some((profile, leader)) => {
                tracing::debug!(
                    disease = %profile.name,
                    risk_score = leader.risk_score,
                    confidence = leader.confidence,
                    match_count = leader.match_count,
                    "Condition selected"
                );
                AssessmentResult {
                    disease: profile.name.clone(),
                    risk_score: leader.risk_score,
                    confidence: leader.confidence,
                    preventive: profile.preventive_measures.clone(),
                }
            }
            None => {
                tracing::debug!(symptoms = symptoms.len(), "No condition matched");
                AssessmentResult::fallback()
            }
        }
    }

    /// Validate the request, then [`assess`](Self::assess) it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::EngineError::InvalidInput)
    /// when the request fails [`validate_request`].
    pub fn assess_checked(&self, request: &AssessmentRequest) -> EngineResult<AssessmentResult> {
        validate_request(request)?;
        Ok(self.assess(request))
    }

    /// Every matching condition, best first.
    ///
    /// Equal composite scores keep catalog order, so the first entry always
    /// names the condition [`assess`](Self::assess) selects.
    pub fn differential(&self, request: &AssessmentRequest) -> Vec<CandidateScore> {
        let symptoms = Self::normalize(request);

        let mut candidates: Vec<CandidateScore> = self
            .catalog
            .iter()
            .filter_map(|profile| score_profile(profile, request.age, request.gender, &symptoms))
            .collect();

        candidates.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        candidates
    }

    fn normalize(request: &AssessmentRequest) -> Vec<String> {
        request.symptoms.iter().map(|s| normalize_symptom(s)).collect()
    }
}
