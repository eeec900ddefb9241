//! Static market reference data.
//!
//! The benchmark table is the interpolation grid for every estimator.
//! Calibration anchors document the acceptance curve fit and are only used
//! as regression fixtures.

pub mod benchmarks;
pub mod calibration;

pub use benchmarks::{benchmarks, Benchmark};
pub use calibration::{calibration_anchors, CalibrationAnchor};
