//! Shared value types used across the estimation pipeline.

pub mod client;
pub mod complexity;
pub mod range;
pub mod tier;

pub use client::ClientType;
pub use complexity::{DimensionScores, RiskFlags};
pub use range::ValueRange;
pub use tier::Tier;
