//! Full estimation pipeline.
//!
//! Scorer → interpolator → hours → risk → price → acceptance → Monte Carlo →
//! profit optimizer, assembled into one [`AnalysisReport`].

pub mod batch;
pub mod reasoning;
pub mod report;
pub mod request;

pub use batch::analyze_batch;
pub use report::{AnalysisReport, MarketContext, SimilarProject};
pub use request::FullAnalysisRequest;

use costlens_core::config::CostlensConfig;
use costlens_core::EstimationResult;

use crate::acceptance::acceptance;
use crate::complexity::{complexity_radar, compute_complexity_score};
use crate::hours::estimate_hours;
use crate::interpolation::{interpolate, interpolate_range, nearest_benchmarks, BenchmarkField};
use crate::optimizer::optimize_profit;
use crate::pricing::{predict_price, PriceRequest};
use crate::risk::calculate_risk;
use crate::simulation::{CostModel, MonteCarloSimulator};

/// Number of similar benchmarks reported.
pub const SIMILAR_PROJECT_COUNT: usize = 3;

/// Runs full analyses against one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct EstimationPipeline {
    config: CostlensConfig,
}

impl EstimationPipeline {
    pub fn new(config: CostlensConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CostlensConfig {
        &self.config
    }

    /// Validate `request` and run every estimation stage.
    pub fn analyze(&self, request: &FullAnalysisRequest) -> EstimationResult<AnalysisReport> {
        request.validate()?;

        let complexity = compute_complexity_score(
            request.hardware_score,
            request.software_score,
            request.ai_ml_score,
            request.deployment_score,
            request.risk_safety_score,
        );
        let score = complexity.total_score;
        let tier = complexity.tier;

        let span = costlens_core::analysis_span!(score, tier);
        let _guard = span.enter();

        let pricing = &self.config.pricing;
        let profit_percent = request
            .profit_percent
            .unwrap_or_else(|| pricing.effective_profit_percent());
        let client_type = request
            .client_type
            .unwrap_or_else(|| pricing.effective_client_type());

        let suggested_rate = interpolate(score, BenchmarkField::Rate);
        let hourly_rate = if request.hourly_rate > 0.0 {
            request.hourly_rate
        } else {
            suggested_rate
        };

        let hours = estimate_hours(score, tier);
        let risk = calculate_risk(&request.flags);
        tracing::debug!(
            estimated_hours = hours.estimated_hours,
            risk_percent = risk.risk_percent,
            hourly_rate,
            "hours and risk estimated"
        );

        let hardware_cost = if request.hardware_cost > 0.0 {
            request.hardware_cost
        } else {
            interpolate_range(score, BenchmarkField::HardwareCost).midpoint()
        };

        let price = predict_price(&PriceRequest {
            estimated_hours: hours.hours(),
            hourly_rate,
            hardware_cost,
            risk_percent: risk.risk_percent,
            profit_percent,
            total_score: score,
            tier,
        });
        tracing::debug!(predicted_price = price.predicted_price, "price predicted");

        let quoted_price = request.quoted_price.unwrap_or(price.predicted_price);
        let acceptance_model = acceptance(
            quoted_price,
            price.predicted_price,
            tier,
            client_type,
            risk.risk_percent,
        );

        let simulation_config = &self.config.simulation;
        let risk_simulation = MonteCarloSimulator::from_config(simulation_config).simulate(
            &CostModel {
                base_hours: hours.hours(),
                hourly_rate,
                hardware_cost,
                risk_percent: risk.risk_percent,
                has_ai: request.flags.has_ai,
                custom_pcb: request.flags.custom_pcb,
                rework_probability: simulation_config.effective_rework_probability(),
                delay_cost_per_week: simulation_config.effective_delay_cost_per_week(),
            },
        )?;

        let base_cost = hours.hours() * hourly_rate + hardware_cost;
        let profit_optimization = optimize_profit(base_cost, tier, client_type, risk.risk_percent);

        let similar_projects = nearest_benchmarks(score, SIMILAR_PROJECT_COUNT)
            .into_iter()
            .map(SimilarProject::from)
            .collect();

        let market_context = MarketContext {
            suggested_rate,
            applied_rate: hourly_rate,
            market_rate_range: tier.market_rate_range(),
            total_cost_range: tier.total_cost_range(),
            hardware_cost_estimate: hardware_cost,
        };

        let mut report = AnalysisReport {
            complexity,
            hours,
            risk,
            price_prediction: price,
            acceptance_model,
            risk_simulation,
            profit_optimization,
            complexity_analysis: complexity_radar(&complexity.scores),
            reasoning: String::new(),
            similar_projects,
            market_context,
        };
        report.reasoning = reasoning::build_reasoning(&report);

        tracing::info!(
            predicted_price = report.price_prediction.predicted_price,
            acceptance = report.acceptance_model.probability,
            optimal_margin = report.profit_optimization.optimal_margin,
            "analysis complete"
        );
        Ok(report)
    }
}

/// Analyse one request with the default configuration.
pub fn full_analysis(request: &FullAnalysisRequest) -> EstimationResult<AnalysisReport> {
    EstimationPipeline::default().analyze(request)
}
