//! Simulation inputs and results.

use serde::{Deserialize, Serialize};

use costlens_core::constants::{
    DEFAULT_DELAY_COST_PER_WEEK, DEFAULT_REWORK_PROBABILITY, DEFAULT_RISK_PERCENT,
    DEFAULT_SIMULATIONS, MAX_SIMULATIONS, MIN_SIMULATIONS,
};
use costlens_core::errors::ValidationError;
use costlens_core::types::ValueRange;

use crate::validate;

/// Parameters of the stochastic cost model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub base_hours: f64,
    pub hourly_rate: f64,
    pub hardware_cost: f64,
    pub risk_percent: f64,
    /// Widens the hours distribution by 30%.
    pub has_ai: bool,
    /// Adds 10 points of rework probability, capped at 35%.
    pub custom_pcb: bool,
    pub rework_probability: f64,
    pub delay_cost_per_week: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_hours: 120.0,
            hourly_rate: 2500.0,
            hardware_cost: 0.0,
            risk_percent: DEFAULT_RISK_PERCENT,
            has_ai: false,
            custom_pcb: false,
            rework_probability: DEFAULT_REWORK_PROBABILITY,
            delay_cost_per_week: DEFAULT_DELAY_COST_PER_WEEK,
        }
    }
}

impl CostModel {
    /// Deterministic estimate: `base_hours × rate + hardware`.
    pub fn naive_estimate(&self) -> f64 {
        self.base_hours * self.hourly_rate + self.hardware_cost
    }

    /// Standard deviation of sampled hours.
    pub fn hours_sigma(&self) -> f64 {
        let sigma = self.base_hours * (0.10 + self.risk_percent / 100.0);
        if self.has_ai {
            sigma * 1.3
        } else {
            sigma
        }
    }

    pub fn effective_rework_probability(&self) -> f64 {
        if self.custom_pcb {
            (self.rework_probability + 0.10).min(0.35)
        } else {
            self.rework_probability
        }
    }

    /// Standard deviation of the delay in weeks.
    pub fn delay_sigma_weeks(&self) -> f64 {
        0.8 + self.risk_percent / 30.0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::at_least("base_hours", self.base_hours, 1.0)?;
        validate::non_negative("hourly_rate", self.hourly_rate)?;
        validate::non_negative("hardware_cost", self.hardware_cost)?;
        validate::non_negative("risk_percent", self.risk_percent)?;
        validate::in_range("rework_probability", self.rework_probability, 0.0, 1.0)?;
        validate::non_negative("delay_cost_per_week", self.delay_cost_per_week)
    }
}

/// Standalone simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub model: CostModel,
    pub num_simulations: u32,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            model: CostModel::default(),
            num_simulations: DEFAULT_SIMULATIONS,
        }
    }
}

impl SimulationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.model.validate()?;
        validate::in_range(
            "num_simulations",
            f64::from(self.num_simulations),
            f64::from(MIN_SIMULATIONS),
            f64::from(MAX_SIMULATIONS),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentiles {
    pub p5: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl Percentiles {
    pub fn is_ordered(&self) -> bool {
        self.p5 <= self.p25
            && self.p25 <= self.median
            && self.median <= self.p75
            && self.p75 <= self.p90
            && self.p90 <= self.p95
    }
}

/// Equal-width histogram; `bins` holds bin centres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<f64>,
    pub frequency: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub percentiles: Percentiles,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// `[p5, p95]`.
    pub confidence_90: ValueRange,
    pub histogram: Histogram,
    /// Fraction of samples above 110% of the naive estimate.
    pub overrun_probability: f64,
    pub naive_estimate: f64,
    pub iterations: u32,
    pub seed: u64,
}

impl SimulationResult {
    pub fn best_case(&self) -> f64 {
        self.percentiles.p5
    }

    pub fn worst_case(&self) -> f64 {
        self.percentiles.p95
    }

    pub fn overrun_probability_pct(&self) -> f64 {
        self.overrun_probability * 100.0
    }
}
