//! Rules-based symptom scoring engine for HealthGuard Engine
//!
//! Given an age, a gender and a list of free-text symptoms, the engine picks
//! the best-matching condition from a fixed catalog and reports a risk score,
//! a confidence value and preventive recommendations. It performs no I/O
//! while scoring and holds no mutable state, so one engine can serve any
//! number of concurrent requests.
//!
//! # Example
//!
//! ```rust
//! use symptom_engine::{AssessmentRequest, Gender, SymptomEngine};
//!
//! let engine = SymptomEngine::builtin()?;
//! let request = AssessmentRequest::new(
//!     25,
//!     Gender::Female,
//!     ["burning urination", "frequent urination"],
//! );
//!
//! let result = engine.assess_checked(&request)?;
//! assert_eq!(result.disease, "Urinary Tract Infection (UTI)");
//! assert!(result.risk_score <= 95);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Catalog
//!
//! The bundled catalog lives in `data/conditions.yaml`. Operators can point
//! `HEALTHGUARD_CATALOG_PATH` at a YAML or JSON file with the same schema to
//! iterate on content without rebuilding (see [`EngineConfig`]).

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

pub use catalog::{AgeRule, ConditionCatalog, ConditionProfile, GenderRule};
pub use config::EngineConfig;
pub use engine::{score_profile, SymptomEngine};
pub use error::*;
pub use types::*;
pub use validation::validate_request;
