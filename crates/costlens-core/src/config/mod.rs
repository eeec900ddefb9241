//! Configuration system for costlens.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod costlens_config;
pub mod pricing_config;
pub mod simulation_config;

pub use costlens_config::{ConfigOverrides, CostlensConfig};
pub use pricing_config::PricingConfig;
pub use simulation_config::SimulationConfig;
