//! # costlens-core
//!
//! Foundation crate for the costlens estimation engine.
//! Defines the shared types, the static market reference tables, errors,
//! config, tracing setup, and constants. `costlens-analytics` builds every
//! estimation component on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod reference;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CostlensConfig;
pub use errors::{EstimationError, EstimationResult};
pub use reference::{benchmarks, calibration_anchors, Benchmark, CalibrationAnchor};
pub use types::{ClientType, DimensionScores, RiskFlags, Tier, ValueRange};
