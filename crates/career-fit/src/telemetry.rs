use crate::config::TelemetryConfig;
use std::env;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Targets a bare level such as `debug` applies to.
const ASSESSMENT_TARGETS: [&str; 2] = ["career_fit", "career_fit_cli"];

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("log filter '{value}' is not a valid tracing directive")]
    InvalidFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber could not be installed: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level into per-crate directives; full directive lists
/// (anything with `=` or `,`) pass through untouched.
fn directive_for(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    ASSESSMENT_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `RUST_LOG` wins when it parses; otherwise the configured level is used.
fn build_filter(
    config: &TelemetryConfig,
    rust_log: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }

    let directive = directive_for(&config.log_level);
    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::InvalidFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Install the global fmt subscriber. Logs go to stderr so they never mix
/// with the question prompts on stdout.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = build_filter(config, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
