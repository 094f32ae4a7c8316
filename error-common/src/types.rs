use thiserror::Error;

use crate::codes;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum HealthGuardError {
    /// Malformed or out-of-range request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Condition catalog could not be loaded or failed its integrity checks
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HealthGuardError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogError(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Structured error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => codes::validation::INVALID_INPUT,
            Self::CatalogError(_) => codes::catalog::LOAD_FAILED,
            Self::NetworkError(_) => codes::system::NETWORK,
            Self::ServerError(_) => codes::system::SERVER,
            Self::ConfigError(_) => codes::system::CONFIGURATION,
            Self::InternalError(_) | Self::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Whether the caller, rather than the service, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for HealthGuard operations
pub type Result<T> = std::result::Result<T, HealthGuardError>;

/// Log an error with the component it surfaced in
pub fn log_error(context: &str, error: &HealthGuardError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "HealthGuard error occurred"
    );
}
