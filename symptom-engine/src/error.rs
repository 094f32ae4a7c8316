use std::path::PathBuf;

use error_common::HealthGuardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Condition catalog is empty")]
    Empty,

    #[error("Condition at position {0} has a blank name")]
    BlankName(usize),

    #[error("Condition '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("Condition '{0}' has no keywords")]
    NoKeywords(String),

    #[error("Condition '{0}' has a blank keyword")]
    BlankKeyword(String),

    #[error("Condition '{name}' has base risk {base_risk}, expected 0..=100")]
    BaseRiskOutOfRange { name: String, base_risk: u32 },

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML catalog parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON catalog parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl EngineError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<EngineError> for HealthGuardError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput(message) => HealthGuardError::InvalidInput(message),
            EngineError::Catalog(err) => HealthGuardError::CatalogError(err.to_string()),
        }
    }
}

impl From<CatalogError> for HealthGuardError {
    fn from(error: CatalogError) -> Self {
        HealthGuardError::CatalogError(error.to_string())
    }
}
