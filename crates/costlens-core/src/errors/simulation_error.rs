//! Monte Carlo simulation errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while setting up a simulation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid distribution for {parameter}: {reason}")]
    InvalidDistribution { parameter: String, reason: String },
}

impl ErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        error_code::SIMULATION_ERROR
    }
}
