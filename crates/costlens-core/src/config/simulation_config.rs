//! Monte Carlo simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the Monte Carlo simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of sampled outcomes per run. Default: 5000.
    pub iterations: Option<u32>,
    /// RNG seed shared by every run. Default: 42.
    pub seed: Option<u64>,
    /// Baseline probability of rework. Default: 0.15.
    pub rework_probability: Option<f64>,
    /// Cost of one week of delay, in rupees. Default: 5000.
    pub delay_cost_per_week: Option<f64>,
}

impl SimulationConfig {
    pub fn effective_iterations(&self) -> u32 {
        self.iterations.unwrap_or(constants::DEFAULT_SIMULATIONS)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(constants::DEFAULT_SIMULATION_SEED)
    }

    pub fn effective_rework_probability(&self) -> f64 {
        self.rework_probability
            .unwrap_or(constants::DEFAULT_REWORK_PROBABILITY)
    }

    pub fn effective_delay_cost_per_week(&self) -> f64 {
        self.delay_cost_per_week
            .unwrap_or(constants::DEFAULT_DELAY_COST_PER_WEEK)
    }
}
