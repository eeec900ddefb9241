//! # costlens-analytics
//!
//! The financial estimation pipeline for engineering service quotes.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`complexity`] | Clamp 5 dimensions, total score, tier, radar view |
//! | [`interpolation`] | Piecewise-linear lookup over the benchmark grid |
//! | [`hours`] | Blend benchmark and tier-formula hour estimates |
//! | [`risk`] | Additive, capped risk percentage |
//! | [`acceptance`] | Logistic acceptance curve with contextual adjustments |
//! | [`pricing`] | Blended formula/benchmark price with confidence interval |
//! | [`simulation`] | Seeded Monte Carlo cost distribution |
//! | [`optimizer`] | Margin sweep maximizing expected revenue |
//! | [`pipeline`] | Orchestrates everything into one report, single or batched |
//!
//! Every component is a pure function over its inputs and the static tables
//! in `costlens_core::reference`.

pub mod acceptance;
pub mod complexity;
pub mod hours;
pub mod interpolation;
pub mod optimizer;
pub mod pipeline;
pub mod pricing;
pub mod risk;
pub mod simulation;

mod validate;

pub use acceptance::{acceptance, run_acceptance, AcceptanceRequest, AcceptanceResult, Verdict};
pub use complexity::{
    complexity_radar, compute_complexity_score, run_complexity_score, ComplexityRadar,
    ComplexityRequest, ComplexityScore,
};
pub use hours::{estimate_hours, HoursEstimate};
pub use interpolation::{interpolate, nearest_benchmarks, BenchmarkField, Bound};
pub use optimizer::{optimize_profit, run_optimize_profit, ProfitOptimization, ProfitRequest};
pub use pipeline::{
    analyze_batch, full_analysis, AnalysisReport, EstimationPipeline, FullAnalysisRequest,
};
pub use pricing::{predict_price, run_predict_price, PriceEstimate, PriceRequest};
pub use risk::{calculate_risk, RiskAssessment};
pub use simulation::{run_simulation, MonteCarloSimulator, SimulationRequest, SimulationResult};
