//! Top-level estimation error.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, SimulationError, ValidationError};

/// Error type of every `run_*` entry point.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for EstimationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl ErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type EstimationResult<T> = Result<T, EstimationError>;
