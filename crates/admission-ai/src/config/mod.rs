use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::admissions::EngineConfig;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogSource,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let catalog = CatalogSource {
            path: non_empty_var("ADMISSION_CATALOG_PATH").map(PathBuf::from),
            cutoffs_csv: non_empty_var("ADMISSION_CUTOFFS_CSV").map(PathBuf::from),
        };

        let mut engine = EngineConfig::default();
        if let Some(raw) = non_empty_var("ADMISSION_MAX_RECOMMENDATIONS") {
            engine.max_recommendations = match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidLimit { value: raw }),
            };
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog,
            engine,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Where the reference catalog comes from; `None` means the embedded copy.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub path: Option<PathBuf>,
    pub cutoffs_csv: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLimit { value } => write!(
                f,
                "ADMISSION_MAX_RECOMMENDATIONS must be a positive integer (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLimit { .. } => None,
        }
    }
}
