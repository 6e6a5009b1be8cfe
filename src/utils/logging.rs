// src/utils/logging.rs
// ============================================================================
// LOGGING CONFIGURATION
// ============================================================================
// Structured logging for the engine via the `tracing` ecosystem. The engine
// itself only emits sparse debug/warn events (degenerate-input policies,
// schedule generation); hosts embedding the engine call `init_logging` once
// at startup, or install their own subscriber instead.
// ============================================================================

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

/// Initialize a stdout fmt subscriber with the given filter directives
/// (e.g. `"info"` or `"warn,launchvest=debug"`).
///
/// Fails if the directives are malformed or a global subscriber is already
/// set.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Initialization(e.to_string()))
}
