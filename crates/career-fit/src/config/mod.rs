use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the application.
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

/// How the presenter renders the final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub presentation: PresentationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CAREER_FIT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let output = match env::var("CAREER_FIT_OUTPUT") {
            Ok(raw) => OutputFormat::parse(&raw)?,
            Err(_) => OutputFormat::Text,
        };

        let log_level = env::var("CAREER_FIT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            presentation: PresentationConfig { output },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the presentation collaborator.
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    pub output: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat(value) => write!(
                f,
                "CAREER_FIT_OUTPUT must be 'text' or 'json' (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
