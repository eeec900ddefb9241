//! Client acceptance probability.
//!
//! A logistic price-sensitivity curve `P = L / (1 + e^{k(r - x0)})` over the
//! relative price `r = quoted / predicted_optimal`, fitted to the calibration
//! anchors, followed by additive client/tier and risk adjustments.

use serde::{Deserialize, Serialize};

use costlens_core::errors::ValidationError;
use costlens_core::types::{ClientType, Tier};
use costlens_core::EstimationResult;

use crate::validate;

/// Curve ceiling `L`.
pub const LOGISTIC_CEILING: f64 = 0.92;
/// Curve steepness `k`.
pub const LOGISTIC_STEEPNESS: f64 = 8.5;
/// Relative price at the curve's inflection point `x0`.
pub const LOGISTIC_MIDPOINT: f64 = 1.18;

pub const MIN_PROBABILITY: f64 = 0.05;
pub const MAX_PROBABILITY: f64 = 0.95;

/// Price multipliers sampled for the acceptance chart.
pub const CURVE_MULTIPLIERS: [f64; 17] = [
    0.60, 0.70, 0.75, 0.80, 0.85, 0.90, 0.95, 1.00, 1.05, 1.10, 1.15, 1.20, 1.25, 1.30, 1.35,
    1.40, 1.50,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.70 {
            Self::High
        } else if probability >= 0.45 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// Unadjusted logistic acceptance at `relative_price`.
pub fn logistic_acceptance(relative_price: f64) -> f64 {
    LOGISTIC_CEILING / (1.0 + (LOGISTIC_STEEPNESS * (relative_price - LOGISTIC_MIDPOINT)).exp())
}

/// `quoted / max(predicted_optimal, 1)`.
pub fn relative_price(quoted_price: f64, predicted_optimal_price: f64) -> f64 {
    quoted_price / predicted_optimal_price.max(1.0)
}

/// Sum of the contextual adjustments and why each applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Adjustment {
    pub total: f64,
    pub reasons: Vec<&'static str>,
}

impl Adjustment {
    fn add(&mut self, delta: f64, reason: &'static str) {
        self.total += delta;
        self.reasons.push(reason);
    }
}

/// At most one client/tier rule (first match wins) plus at most one risk rule.
pub fn contextual_adjustment(
    relative_price: f64,
    tier: Tier,
    client_type: ClientType,
    risk_percent: f64,
) -> Adjustment {
    let mut adjustment = Adjustment::default();

    match (client_type, tier) {
        (ClientType::Student, Tier::Normal) => {
            adjustment.add(0.10, "+10% student + Normal project")
        }
        (ClientType::Student, Tier::Moderate) => {
            adjustment.add(0.05, "+5% student + Moderate project")
        }
        (ClientType::Enterprise, _) if relative_price > 1.0 => {
            adjustment.add(-0.10, "-10% enterprise + above optimal")
        }
        (ClientType::Sme, _) if relative_price <= 1.0 => {
            adjustment.add(0.05, "+5% SME + fair price")
        }
        _ => {}
    }

    if risk_percent > 25.0 {
        adjustment.add(-0.10, "-10% high risk (>25%)");
    } else if risk_percent > 18.0 {
        adjustment.add(-0.05, "-5% elevated risk (>18%)");
    }

    adjustment
}

/// Final acceptance probability at `relative_price`, clamped to `[0.05, 0.95]`.
/// The primary probability and every chart point go through this function.
pub fn acceptance_probability(
    relative_price: f64,
    tier: Tier,
    client_type: ClientType,
    risk_percent: f64,
) -> f64 {
    let base = logistic_acceptance(relative_price);
    let adjustment = contextual_adjustment(relative_price, tier, client_type, risk_percent);
    (base + adjustment.total).clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub price: f64,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptanceResult {
    pub probability: f64,
    pub probability_pct: f64,
    pub relative_price: f64,
    pub base_acceptance: f64,
    pub adjustment: f64,
    pub adjustment_reasons: Vec<String>,
    pub verdict: Verdict,
    /// Probability at each of the 17 chart multipliers.
    pub curve: Vec<CurvePoint>,
    pub quoted_price: f64,
    pub market_price: f64,
}

/// Full acceptance model for one quote.
pub fn acceptance(
    quoted_price: f64,
    predicted_optimal_price: f64,
    tier: Tier,
    client_type: ClientType,
    risk_percent: f64,
) -> AcceptanceResult {
    let relative = relative_price(quoted_price, predicted_optimal_price);
    let base_acceptance = logistic_acceptance(relative);
    let adjustment = contextual_adjustment(relative, tier, client_type, risk_percent);
    let probability =
        (base_acceptance + adjustment.total).clamp(MIN_PROBABILITY, MAX_PROBABILITY);

    let curve = CURVE_MULTIPLIERS
        .iter()
        .map(|&multiplier| CurvePoint {
            price: predicted_optimal_price * multiplier,
            probability: acceptance_probability(multiplier, tier, client_type, risk_percent),
        })
        .collect();

    AcceptanceResult {
        probability,
        probability_pct: probability * 100.0,
        relative_price: relative,
        base_acceptance,
        adjustment: adjustment.total,
        adjustment_reasons: adjustment.reasons.into_iter().map(String::from).collect(),
        verdict: Verdict::from_probability(probability),
        curve,
        quoted_price,
        market_price: predicted_optimal_price,
    }
}

/// Standalone acceptance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptanceRequest {
    pub quoted_price: f64,
    pub predicted_optimal_price: f64,
    #[serde(alias = "classification")]
    pub tier: Tier,
    pub client_type: ClientType,
    pub risk_percent: f64,
}

impl Default for AcceptanceRequest {
    fn default() -> Self {
        Self {
            quoted_price: 0.0,
            predicted_optimal_price: 0.0,
            tier: Tier::Normal,
            client_type: ClientType::Startup,
            risk_percent: costlens_core::constants::DEFAULT_RISK_PERCENT,
        }
    }
}

impl AcceptanceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::non_negative("quoted_price", self.quoted_price)?;
        validate::non_negative("predicted_optimal_price", self.predicted_optimal_price)?;
        validate::non_negative("risk_percent", self.risk_percent)
    }
}

pub fn run_acceptance(request: &AcceptanceRequest) -> EstimationResult<AcceptanceResult> {
    request.validate()?;
    Ok(acceptance(
        request.quoted_price,
        request.predicted_optimal_price,
        request.tier,
        request.client_type,
        request.risk_percent,
    ))
}
