//! Seeded Monte Carlo sampler for project cost.
//!
//! Every draw comes from one ChaCha stream seeded per run, in a fixed order,
//! so identical inputs produce bit-identical results.

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Normal;

use costlens_core::config::SimulationConfig;
use costlens_core::constants::{
    DEFAULT_SIMULATIONS, DEFAULT_SIMULATION_SEED, MAX_SIMULATIONS, MIN_SIMULATIONS,
};
use costlens_core::errors::SimulationError;
use costlens_core::types::ValueRange;

use super::types::{CostModel, Histogram, Percentiles, SimulationResult};

/// Number of histogram bins.
pub const HISTOGRAM_BINS: usize = 20;

/// Samples above this multiple of the naive estimate count as overruns.
pub const OVERRUN_THRESHOLD: f64 = 1.1;

/// Monte Carlo simulator for project cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloSimulator {
    iterations: u32,
    seed: u64,
}

impl MonteCarloSimulator {
    /// Create a simulator; `iterations` is clamped to `[100, 50_000]`.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.clamp(MIN_SIMULATIONS, MAX_SIMULATIONS),
            seed: DEFAULT_SIMULATION_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.effective_iterations()).with_seed(config.effective_seed())
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the simulation.
    ///
    /// Fails only when a sampling distribution cannot be built, i.e. the hours
    /// or delay standard deviation is not strictly positive.
    pub fn simulate(&self, model: &CostModel) -> Result<SimulationResult, SimulationError> {
        let span = costlens_core::simulation_span!(self.iterations, self.seed);
        let _guard = span.enter();

        let hours_dist = normal("base_hours", model.base_hours, model.hours_sigma())?;
        let delay_dist = normal("delay_weeks", 0.0, model.delay_sigma_weeks())?;
        let rework_probability = model.effective_rework_probability();
        let risk_fraction = model.risk_percent / 100.0;
        let min_hours = model.base_hours * 0.5;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut samples = Vec::with_capacity(self.iterations as usize);

        for _ in 0..self.iterations {
            let hours = hours_dist.sample(&mut rng).max(min_hours);
            let hardware = model.hardware_cost * rng.gen_range(0.85..1.15);

            let labor = hours * model.hourly_rate;
            let rework = if rng.gen::<f64>() < rework_probability {
                labor * rng.gen_range(0.08..0.25)
            } else {
                0.0
            };

            let delay_weeks = delay_dist.sample(&mut rng).max(0.0);
            let delay = delay_weeks * model.delay_cost_per_week;

            samples.push(labor + hardware + labor * risk_fraction + rework + delay);
        }

        samples.sort_by(f64::total_cmp);

        let naive_estimate = model.naive_estimate();
        let overrun_limit = naive_estimate * OVERRUN_THRESHOLD;
        let overruns = samples.iter().filter(|&&s| s > overrun_limit).count();

        let n = samples.len() as f64;
        let percentiles = Percentiles {
            p5: percentile(&samples, 0.05),
            p25: percentile(&samples, 0.25),
            median: percentile(&samples, 0.50),
            p75: percentile(&samples, 0.75),
            p90: percentile(&samples, 0.90),
            p95: percentile(&samples, 0.95),
        };
        let min = samples.first().copied().unwrap_or(0.0);
        let max = samples.last().copied().unwrap_or(0.0);

        let result = SimulationResult {
            percentiles,
            mean: samples.iter().sum::<f64>() / n,
            std_dev: sample_std_dev(&samples),
            min,
            max,
            confidence_90: ValueRange::new(percentiles.p5, percentiles.p95),
            histogram: histogram(&samples, min, max),
            overrun_probability: overruns as f64 / n,
            naive_estimate,
            iterations: self.iterations,
            seed: self.seed,
        };

        tracing::debug!(
            mean = result.mean,
            p95 = result.percentiles.p95,
            overrun = result.overrun_probability,
            "simulation complete"
        );
        Ok(result)
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATIONS)
    }
}

fn normal(parameter: &str, mean: f64, sigma: f64) -> Result<Normal, SimulationError> {
    if sigma.is_nan() || sigma <= 0.0 || !mean.is_finite() {
        return Err(SimulationError::InvalidDistribution {
            parameter: parameter.to_string(),
            reason: format!("mean {mean} with standard deviation {sigma}"),
        });
    }
    Normal::new(mean, sigma).map_err(|e| SimulationError::InvalidDistribution {
        parameter: parameter.to_string(),
        reason: e.to_string(),
    })
}

/// Element at `floor(n × q)` of a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (sorted.len() as f64 * q) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn sample_std_dev(samples: &[f64]) -> f64 {
    use statrs::statistics::Statistics;
    samples.iter().std_dev()
}

/// 20 equal-width bins over `[min, max]`; the maximum lands in the last bin.
fn histogram(sorted: &[f64], min: f64, max: f64) -> Histogram {
    let width = if max > min {
        (max - min) / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let bins = (0..HISTOGRAM_BINS)
        .map(|i| min + i as f64 * width + width / 2.0)
        .collect();

    let mut frequency = vec![0u32; HISTOGRAM_BINS];
    for &sample in sorted {
        let idx = (((sample - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        frequency[idx] += 1;
    }

    Histogram { bins, frequency }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CostModel {
        CostModel {
            base_hours: 120.0,
            hourly_rate: 1200.0,
            hardware_cost: 15_000.0,
            risk_percent: 15.0,
            has_ai: true,
            custom_pcb: true,
            ..Default::default()
        }
    }

    #[test]
    fn percentiles_are_ordered() {
        let result = MonteCarloSimulator::new(5000).with_seed(42).simulate(&model()).unwrap();
        assert!(result.percentiles.is_ordered(), "{:?}", result.percentiles);
        assert!(result.min <= result.percentiles.p5);
        assert!(result.percentiles.p95 <= result.max);
        assert!(result.std_dev > 0.0);
    }

    #[test]
    fn deterministic_with_seed() {
        let sim = MonteCarloSimulator::new(2000).with_seed(42);
        let a = sim.simulate(&model()).unwrap();
        let b = sim.simulate(&model()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
    }

    #[test]
    fn different_seeds_differ() {
        let a = MonteCarloSimulator::new(2000).with_seed(1).simulate(&model()).unwrap();
        let b = MonteCarloSimulator::new(2000).with_seed(2).simulate(&model()).unwrap();
        assert_ne!(a.mean, b.mean);
    }

    #[test]
    fn histogram_counts_every_sample() {
        let result = MonteCarloSimulator::new(3000).simulate(&model()).unwrap();
        assert_eq!(result.histogram.bins.len(), HISTOGRAM_BINS);
        let total: u32 = result.histogram.frequency.iter().sum();
        assert_eq!(total, 3000);
        assert!(result.histogram.frequency[HISTOGRAM_BINS - 1] >= 1);
    }

    #[test]
    fn iterations_are_clamped() {
        assert_eq!(MonteCarloSimulator::new(10).iterations(), MIN_SIMULATIONS);
        assert_eq!(MonteCarloSimulator::new(1_000_000).iterations(), MAX_SIMULATIONS);
    }

    #[test]
    fn zero_hours_is_invalid_distribution() {
        let model = CostModel {
            base_hours: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            MonteCarloSimulator::default().simulate(&model),
            Err(SimulationError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn hours_never_drop_below_half_base() {
        let model = CostModel {
            base_hours: 100.0,
            hourly_rate: 1000.0,
            hardware_cost: 0.0,
            risk_percent: 35.0,
            has_ai: true,
            rework_probability: 0.0,
            delay_cost_per_week: 0.0,
            ..Default::default()
        };
        let result = MonteCarloSimulator::new(50_000).simulate(&model).unwrap();
        let floor = 50.0 * 1000.0 * 1.35;
        assert!(result.min >= floor - 1e-6, "min {} below floor {floor}", result.min);
        // Wide sigma puts a fifth of the draws under the floor.
        assert!((result.min - floor).abs() < 1e-6);
    }

    #[test]
    fn delay_is_one_sided() {
        let model = CostModel {
            hourly_rate: 0.0,
            hardware_cost: 0.0,
            ..Default::default()
        };
        let result = MonteCarloSimulator::new(5000).simulate(&model).unwrap();
        assert_eq!(result.min, 0.0);
        assert_eq!(result.percentiles.p25, 0.0);
        assert!(result.percentiles.p75 > 0.0);
    }

    #[test]
    fn custom_pcb_rework_is_capped() {
        let model = CostModel {
            custom_pcb: true,
            rework_probability: 0.3,
            ..Default::default()
        };
        assert_eq!(model.effective_rework_probability(), 0.35);
    }

    #[test]
    fn overrun_counts_samples_above_threshold() {
        // Labor only: overrun iff hours > 1.1 x base, i.e. one sigma, about 15.9%.
        let labor_only = CostModel {
            base_hours: 100.0,
            hourly_rate: 1000.0,
            hardware_cost: 0.0,
            risk_percent: 0.0,
            rework_probability: 0.0,
            delay_cost_per_week: 0.0,
            ..Default::default()
        };
        let result = MonteCarloSimulator::new(50_000).simulate(&labor_only).unwrap();
        assert!(
            (0.145..0.175).contains(&result.overrun_probability),
            "{}",
            result.overrun_probability
        );

        // Hardware only: factor uniform on [0.85, 1.15), above 1.1 for one sixth.
        let hardware_only = CostModel {
            hourly_rate: 0.0,
            hardware_cost: 10_000.0,
            delay_cost_per_week: 0.0,
            ..Default::default()
        };
        let result = MonteCarloSimulator::new(50_000).simulate(&hardware_only).unwrap();
        assert!(
            (0.15..0.185).contains(&result.overrun_probability),
            "{}",
            result.overrun_probability
        );

        // Nothing varies above zero: no overruns.
        let empty = CostModel {
            hourly_rate: 0.0,
            hardware_cost: 0.0,
            delay_cost_per_week: 0.0,
            ..Default::default()
        };
        let result = MonteCarloSimulator::new(1000).simulate(&empty).unwrap();
        assert_eq!(result.overrun_probability, 0.0);
    }

    #[test]
    fn constant_samples_fill_first_bin() {
        assert_eq!(histogram(&[5.0, 5.0, 5.0], 5.0, 5.0).frequency[0], 3);
    }

    #[test]
    fn percentile_uses_floor_index() {
        let sorted: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(percentile(&sorted, 0.05), 5.0);
        assert_eq!(percentile(&sorted, 0.95), 95.0);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }
}
