//! Top-level costlens configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PricingConfig, SimulationConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`COSTLENS_*`)
/// 3. Project config (`costlens.toml` in the project root)
/// 4. User config (`~/.costlens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CostlensConfig {
    pub simulation: SimulationConfig,
    pub pricing: PricingConfig,
}

/// Caller-supplied values that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub simulation_iterations: Option<u32>,
    pub simulation_seed: Option<u64>,
    pub profit_percent: Option<f64>,
    pub client_type: Option<String>,
}

impl CostlensConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("costlens.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(
            iterations = config.simulation.effective_iterations(),
            seed = config.simulation.effective_seed(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CostlensConfig) -> Result<(), ConfigError> {
        if let Some(iterations) = config.simulation.iterations {
            if !(constants::MIN_SIMULATIONS..=constants::MAX_SIMULATIONS).contains(&iterations) {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.iterations".to_string(),
                    message: format!(
                        "must be between {} and {}",
                        constants::MIN_SIMULATIONS,
                        constants::MAX_SIMULATIONS
                    ),
                });
            }
        }
        if let Some(p) = config.simulation.rework_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.rework_probability".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(cost) = config.simulation.delay_cost_per_week {
            if !cost.is_finite() || cost < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.delay_cost_per_week".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if let Some(profit) = config.pricing.default_profit_percent {
            if !profit.is_finite() || profit < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "pricing.default_profit_percent".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.costlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".costlens").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CostlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: CostlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    pub fn merge(base: &mut CostlensConfig, other: &CostlensConfig) {
        // Simulation
        if other.simulation.iterations.is_some() {
            base.simulation.iterations = other.simulation.iterations;
        }
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.simulation.rework_probability.is_some() {
            base.simulation.rework_probability = other.simulation.rework_probability;
        }
        if other.simulation.delay_cost_per_week.is_some() {
            base.simulation.delay_cost_per_week = other.simulation.delay_cost_per_week;
        }

        // Pricing
        if other.pricing.default_profit_percent.is_some() {
            base.pricing.default_profit_percent = other.pricing.default_profit_percent;
        }
        if other.pricing.default_client_type.is_some() {
            base.pricing.default_client_type = other.pricing.default_client_type.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COSTLENS_SIMULATION_SEED`, `COSTLENS_PRICING_PROFIT_PERCENT`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CostlensConfig) {
        if let Ok(val) = std::env::var("COSTLENS_SIMULATION_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.simulation.iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COSTLENS_SIMULATION_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.simulation.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COSTLENS_SIMULATION_REWORK_PROBABILITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.simulation.rework_probability = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COSTLENS_SIMULATION_DELAY_COST_PER_WEEK") {
            if let Ok(v) = val.parse::<f64>() {
                config.simulation.delay_cost_per_week = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COSTLENS_PRICING_PROFIT_PERCENT") {
            if let Ok(v) = val.parse::<f64>() {
                config.pricing.default_profit_percent = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut CostlensConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.simulation_iterations {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = overrides.simulation_seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = overrides.profit_percent {
            config.pricing.default_profit_percent = Some(v);
        }
        if let Some(ref v) = overrides.client_type {
            config.pricing.default_client_type = Some(v.clone());
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
