use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::ConditionCatalog;
use crate::engine::SymptomEngine;
use crate::error::CatalogError;

/// Environment variable naming an external catalog file
pub const CATALOG_PATH_ENV: &str = "HEALTHGUARD_CATALOG_PATH";

/// Symptom engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Catalog file to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let catalog_path = std::env::var(CATALOG_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// # Errors
    ///
    /// Fails when the configured file cannot be loaded as a catalog.
    pub fn load_catalog(&self) -> Result<Arc<ConditionCatalog>, CatalogError> {
        match &self.catalog_path {
            Some(path) => ConditionCatalog::from_path(path).map(Arc::new),
            None => {
                tracing::info!("Using bundled condition catalog");
                ConditionCatalog::builtin()
            }
        }
    }

    /// # Errors
    ///
    /// Same as [`EngineConfig::load_catalog`].
    pub fn build_engine(&self) -> Result<SymptomEngine, CatalogError> {
        self.load_catalog().map(SymptomEngine::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_bundled_catalog() {
        let engine = EngineConfig::default().build_engine().unwrap();
        assert_eq!(engine.catalog().len(), 15);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let config = EngineConfig::default().with_catalog_path("/nonexistent/conditions.yaml");
        assert!(matches!(config.load_catalog(), Err(CatalogError::Io { .. })));
    }
}
