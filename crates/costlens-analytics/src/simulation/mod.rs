//! Monte Carlo cost-risk simulation.
//!
//! Seeded, sequential sampling of hours, hardware, rework, and delay, reduced
//! to percentiles, a histogram, and an overrun probability.

pub mod monte_carlo;
pub mod types;

pub use monte_carlo::MonteCarloSimulator;
pub use types::{CostModel, Histogram, Percentiles, SimulationRequest, SimulationResult};

use costlens_core::config::SimulationConfig;
use costlens_core::EstimationResult;

/// Validate `request` and simulate it with the configured seed.
pub fn run_simulation(
    request: &SimulationRequest,
    config: &SimulationConfig,
) -> EstimationResult<SimulationResult> {
    request.validate()?;
    let simulator =
        MonteCarloSimulator::new(request.num_simulations).with_seed(config.effective_seed());
    Ok(simulator.simulate(&request.model)?)
}
