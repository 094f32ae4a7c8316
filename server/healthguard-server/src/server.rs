use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use error_common::HealthGuardError;
use symptom_engine::{EngineConfig, SymptomEngine};
use tracing::info;

pub const HOST_ENV: &str = "HEALTHGUARD_HOST";
pub const PORT_ENV: &str = "PORT";
pub const ENVIRONMENT_ENV: &str = "HEALTHGUARD_ENV";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Anything other than "development" gets JSON logs
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn bind_address(&self) -> Result<SocketAddr, HealthGuardError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| HealthGuardError::config(format!("invalid bind address: {e}")))
    }
}

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct HealthGuardServer {
    pub config: Arc<ServerConfig>,
    pub engine: SymptomEngine,
    pub started_at: Instant,
}

impl HealthGuardServer {
    /// Build the server state, loading the condition catalog once
    pub fn new(config: ServerConfig) -> Result<Self, HealthGuardError> {
        let engine = config.engine.build_engine()?;
        info!(conditions = engine.catalog().len(), "Condition catalog loaded");
        Ok(Self::with_engine(config, engine))
    }

    pub fn with_engine(config: ServerConfig, engine: SymptomEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
