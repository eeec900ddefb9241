//! Orchestrator output.

use serde::Serialize;

use costlens_core::reference::Benchmark;
use costlens_core::types::ValueRange;
use costlens_core::EstimationResult;

use crate::acceptance::AcceptanceResult;
use crate::complexity::{ComplexityRadar, ComplexityScore};
use crate::hours::HoursEstimate;
use crate::optimizer::ProfitOptimization;
use crate::pricing::PriceEstimate;
use crate::risk::RiskAssessment;
use crate::simulation::SimulationResult;

use super::reasoning::{format_amount, format_inr};

/// Summary of a benchmark close to the analysed project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarProject {
    pub id: u32,
    pub name: &'static str,
    pub score: u32,
    /// e.g. `₹15,000 – ₹22,000`
    pub cost_range: String,
    /// e.g. `25-40h`
    pub hours: String,
    /// e.g. `₹500/hr`
    pub rate: String,
}

impl From<&Benchmark> for SimilarProject {
    fn from(b: &Benchmark) -> Self {
        Self {
            id: b.id,
            name: b.name,
            score: b.score,
            cost_range: format!(
                "{} – {}",
                format_inr(b.total_cost.low),
                format_inr(b.total_cost.high)
            ),
            hours: format!(
                "{}-{}h",
                format_amount(b.hours.low),
                format_amount(b.hours.high)
            ),
            rate: format!("{}/hr", format_inr(b.rate)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketContext {
    /// Benchmark-interpolated hourly rate for the score.
    pub suggested_rate: f64,
    /// Rate actually used for the estimate.
    pub applied_rate: f64,
    pub market_rate_range: ValueRange,
    pub total_cost_range: ValueRange,
    /// Hardware cost used for the estimate.
    pub hardware_cost_estimate: f64,
}

/// Everything the pipeline produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub complexity: ComplexityScore,
    pub hours: HoursEstimate,
    pub risk: RiskAssessment,
    #[serde(rename = "pricePrediction")]
    pub price_prediction: PriceEstimate,
    #[serde(rename = "acceptanceModel")]
    pub acceptance_model: AcceptanceResult,
    #[serde(rename = "riskSimulation")]
    pub risk_simulation: SimulationResult,
    #[serde(rename = "profitOptimization")]
    pub profit_optimization: ProfitOptimization,
    #[serde(rename = "complexityAnalysis")]
    pub complexity_analysis: ComplexityRadar,
    pub reasoning: String,
    pub similar_projects: Vec<SimilarProject>,
    pub market_context: MarketContext,
}

impl AnalysisReport {
    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> EstimationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
