//! Shared constants for the costlens estimation engine.

/// costlens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Complexity ----

/// Maximum score of a single complexity dimension.
pub const MAX_DIMENSION_SCORE: i64 = 5;

/// Number of complexity dimensions.
pub const DIMENSION_COUNT: usize = 5;

/// Maximum total complexity score (5 dimensions × 5).
pub const MAX_TOTAL_SCORE: u32 = 25;

// ---- Risk ----

/// Base delivery risk applied to every project (percent).
pub const BASE_RISK_PERCENT: f64 = 8.0;

/// Hard ceiling on the accumulated risk percentage.
pub const MAX_RISK_PERCENT: f64 = 35.0;

pub const SAFETY_CRITICAL_RISK_PERCENT: f64 = 5.0;
pub const AI_RISK_PERCENT: f64 = 4.0;
pub const CUSTOM_PCB_RISK_PERCENT: f64 = 3.0;
pub const LARGE_SCALE_RISK_PERCENT: f64 = 3.0;

// ---- Simulation ----

/// Default Monte Carlo iteration count.
pub const DEFAULT_SIMULATIONS: u32 = 5000;

/// Smallest accepted Monte Carlo iteration count.
pub const MIN_SIMULATIONS: u32 = 100;

/// Largest accepted Monte Carlo iteration count.
pub const MAX_SIMULATIONS: u32 = 50_000;

/// Seed used for every simulation unless configured otherwise.
pub const DEFAULT_SIMULATION_SEED: u64 = 42;

/// Default probability that a project needs rework.
pub const DEFAULT_REWORK_PROBABILITY: f64 = 0.15;

/// Default cost of one week of schedule slip (rupees).
pub const DEFAULT_DELAY_COST_PER_WEEK: f64 = 5000.0;

// ---- Pricing ----

/// Default profit margin applied on top of the risk-adjusted cost (percent).
pub const DEFAULT_PROFIT_PERCENT: f64 = 20.0;

/// Default client type label.
pub const DEFAULT_CLIENT_TYPE: &str = "startup";

/// Default risk percentage assumed by standalone requests.
pub const DEFAULT_RISK_PERCENT: f64 = BASE_RISK_PERCENT;

/// Currency symbol used in human-readable output.
pub const CURRENCY_SYMBOL: &str = "₹";
