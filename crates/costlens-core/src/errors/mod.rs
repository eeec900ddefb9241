//! Error handling for costlens.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod estimation_error;
pub mod simulation_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use estimation_error::{EstimationError, EstimationResult};
pub use simulation_error::SimulationError;
pub use validation_error::ValidationError;
