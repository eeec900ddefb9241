//! Profit-margin optimization.

use serde::{Deserialize, Serialize};

use costlens_core::constants::DEFAULT_RISK_PERCENT;
use costlens_core::errors::ValidationError;
use costlens_core::types::{ClientType, Tier};
use costlens_core::EstimationResult;

use crate::acceptance::{acceptance_probability, relative_price};
use crate::validate;

pub const MIN_MARGIN: u32 = 5;
pub const MAX_MARGIN: u32 = 40;
/// Margin step of the chart series.
pub const CHART_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarginPoint {
    pub margin: u32,
    pub price: f64,
    pub probability: f64,
    pub expected_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitOptimization {
    /// Every margin from 5% to 40%.
    pub sweep: Vec<MarginPoint>,
    /// 5%, 10%, ..., 40%.
    pub chart: Vec<MarginPoint>,
    pub optimal_margin: u32,
    pub optimal_price: f64,
    pub optimal_revenue: f64,
}

/// Sweep margins 5..=40 and pick the one maximizing `price × P(accept)`.
/// Ties keep the lowest margin.
pub fn optimize_profit(
    base_cost: f64,
    tier: Tier,
    client_type: ClientType,
    risk_percent: f64,
) -> ProfitOptimization {
    let span = costlens_core::optimization_span!(base_cost);
    let _guard = span.enter();

    let sweep: Vec<MarginPoint> = (MIN_MARGIN..=MAX_MARGIN)
        .map(|margin| {
            let price = base_cost * (1.0 + f64::from(margin) / 100.0);
            let probability = acceptance_probability(
                relative_price(price, base_cost),
                tier,
                client_type,
                risk_percent,
            );
            MarginPoint {
                margin,
                price,
                probability,
                expected_revenue: price * probability,
            }
        })
        .collect();

    let (optimal_margin, optimal_revenue) =
        sweep
            .iter()
            .fold((MIN_MARGIN, 0.0), |(best_margin, best_revenue), point| {
                if point.expected_revenue > best_revenue {
                    (point.margin, point.expected_revenue)
                } else {
                    (best_margin, best_revenue)
                }
            });

    let chart = sweep.iter().step_by(CHART_STEP).copied().collect();

    tracing::debug!(optimal_margin, optimal_revenue, "margin sweep complete");

    ProfitOptimization {
        sweep,
        chart,
        optimal_margin,
        optimal_price: base_cost * (1.0 + f64::from(optimal_margin) / 100.0),
        optimal_revenue,
    }
}

/// Standalone optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitRequest {
    pub base_cost: f64,
    #[serde(alias = "classification")]
    pub tier: Tier,
    pub client_type: ClientType,
    pub risk_percent: f64,
}

impl Default for ProfitRequest {
    fn default() -> Self {
        Self {
            base_cost: 0.0,
            tier: Tier::Normal,
            client_type: ClientType::Startup,
            risk_percent: DEFAULT_RISK_PERCENT,
        }
    }
}

impl ProfitRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::non_negative("base_cost", self.base_cost)?;
        validate::non_negative("risk_percent", self.risk_percent)
    }
}

pub fn run_optimize_profit(request: &ProfitRequest) -> EstimationResult<ProfitOptimization> {
    request.validate()?;
    Ok(optimize_profit(
        request.base_cost,
        request.tier,
        request.client_type,
        request.risk_percent,
    ))
}
