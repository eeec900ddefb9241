//! Benchmark-anchored price prediction.
//!
//! The formula price `(hours × rate + hardware) × (1 + risk%) × (1 + profit%)`
//! is blended with the interpolated benchmark total-cost midpoint. When the
//! supplied hardware cost diverges strongly from the benchmark, the formula
//! is trusted more.

use serde::{Deserialize, Serialize};

use costlens_core::constants::{DEFAULT_PROFIT_PERCENT, DEFAULT_RISK_PERCENT, MAX_TOTAL_SCORE};
use costlens_core::errors::ValidationError;
use costlens_core::types::{Tier, ValueRange};
use costlens_core::EstimationResult;

use crate::interpolation::{interpolate_range, BenchmarkField};
use crate::validate;

/// Standard blend.
pub const STANDARD_BLEND: BlendWeights = BlendWeights {
    formula: 0.60,
    benchmark: 0.40,
};

/// Blend used when the hardware cost is far from the benchmark.
pub const NONSTANDARD_HARDWARE_BLEND: BlendWeights = BlendWeights {
    formula: 0.80,
    benchmark: 0.20,
};

/// Hardware/benchmark ratios outside `[0.3, 2.0]` count as non-standard.
pub const HARDWARE_RATIO_MIN: f64 = 0.3;
pub const HARDWARE_RATIO_MAX: f64 = 2.0;

/// Floor on the relative half-width of the confidence interval.
pub const MIN_SPREAD: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendWeights {
    pub formula: f64,
    pub benchmark: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub predicted_price: f64,
    pub confidence_interval: ValueRange,
    pub base_labor: f64,
    pub hardware_cost: f64,
    pub risk_buffer: f64,
    pub profit_buffer: f64,
    pub subtotal: f64,
    pub formula_price: f64,
    /// Interpolated benchmark total-cost bounds.
    pub benchmark_range: ValueRange,
    pub weights: BlendWeights,
    pub nonstandard_hardware: bool,
    /// Market hourly-rate range of the tier.
    pub market_rate_range: ValueRange,
}

/// Price request. Defaults describe a 120h project at ₹2500/hr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRequest {
    pub estimated_hours: f64,
    pub hourly_rate: f64,
    pub hardware_cost: f64,
    pub risk_percent: f64,
    pub profit_percent: f64,
    pub total_score: u32,
    #[serde(alias = "classification")]
    pub tier: Tier,
}

impl Default for PriceRequest {
    fn default() -> Self {
        Self {
            estimated_hours: 120.0,
            hourly_rate: 2500.0,
            hardware_cost: 0.0,
            risk_percent: DEFAULT_RISK_PERCENT,
            profit_percent: DEFAULT_PROFIT_PERCENT,
            total_score: 5,
            tier: Tier::Normal,
        }
    }
}

impl PriceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::at_least("estimated_hours", self.estimated_hours, 1.0)?;
        validate::non_negative("hourly_rate", self.hourly_rate)?;
        validate::non_negative("hardware_cost", self.hardware_cost)?;
        validate::non_negative("risk_percent", self.risk_percent)?;
        validate::non_negative("profit_percent", self.profit_percent)?;
        validate::in_range(
            "total_score",
            f64::from(self.total_score),
            0.0,
            f64::from(MAX_TOTAL_SCORE),
        )
    }
}

/// Predict a price. Never fails; see [`run_predict_price`] for the validated entry point.
pub fn predict_price(request: &PriceRequest) -> PriceEstimate {
    let base_labor = request.estimated_hours * request.hourly_rate;
    let subtotal = base_labor + request.hardware_cost;
    let risk_buffer = subtotal * (request.risk_percent / 100.0);
    let after_risk = subtotal + risk_buffer;
    let profit_buffer = after_risk * (request.profit_percent / 100.0);
    let formula_price = after_risk + profit_buffer;

    let benchmark_range = interpolate_range(request.total_score, BenchmarkField::TotalCost);
    let benchmark_hardware =
        interpolate_range(request.total_score, BenchmarkField::HardwareCost).midpoint();

    let nonstandard_hardware = benchmark_hardware > 0.0 && request.hardware_cost > 0.0 && {
        let ratio = request.hardware_cost / benchmark_hardware;
        !(HARDWARE_RATIO_MIN..=HARDWARE_RATIO_MAX).contains(&ratio)
    };
    let weights = if nonstandard_hardware {
        tracing::warn!(
            hardware_cost = request.hardware_cost,
            benchmark_hardware,
            "hardware cost diverges from benchmark, weighting formula price"
        );
        NONSTANDARD_HARDWARE_BLEND
    } else {
        STANDARD_BLEND
    };

    let predicted_price =
        weights.formula * formula_price + weights.benchmark * benchmark_range.midpoint();

    let tier_cost = request.tier.total_cost_range();
    let spread = (tier_cost.width() / tier_cost.high.max(1.0) * 0.3
        + request.risk_percent / 100.0 * 0.15)
        .max(MIN_SPREAD);

    PriceEstimate {
        predicted_price,
        confidence_interval: ValueRange::new(
            predicted_price * (1.0 - spread),
            predicted_price * (1.0 + spread),
        ),
        base_labor,
        hardware_cost: request.hardware_cost,
        risk_buffer,
        profit_buffer,
        subtotal,
        formula_price,
        benchmark_range,
        weights,
        nonstandard_hardware,
        market_rate_range: request.tier.market_rate_range(),
    }
}

pub fn run_predict_price(request: &PriceRequest) -> EstimationResult<PriceEstimate> {
    request.validate()?;
    Ok(predict_price(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn request(hardware_cost: f64) -> PriceRequest {
        PriceRequest {
            estimated_hours: 30.0,
            hourly_rate: 600.0,
            hardware_cost,
            risk_percent: 8.0,
            profit_percent: 20.0,
            total_score: 6,
            tier: Tier::Normal,
        }
    }

    #[test]
    fn standard_blend() {
        let est = predict_price(&request(1000.0));
        assert!((est.base_labor - 18_000.0).abs() < EPS);
        assert!((est.subtotal - 19_000.0).abs() < EPS);
        assert!((est.risk_buffer - 1_520.0).abs() < EPS);
        assert!((est.profit_buffer - 4_104.0).abs() < EPS);
        assert!((est.formula_price - 24_624.0).abs() < EPS);
        assert_eq!(est.benchmark_range, ValueRange::new(25_000.0, 38_000.0));
        assert!(!est.nonstandard_hardware);
        assert!((est.predicted_price - 27_374.4).abs() < EPS);
    }

    #[test]
    fn interval_spread() {
        let est = predict_price(&request(1000.0));
        // (25k / 40k) × 0.3 + 0.08 × 0.15 = 0.1995
        let expected = 27_374.4 * 0.1995;
        assert!((est.predicted_price - est.confidence_interval.low - expected).abs() < 1e-3);
        assert!((est.confidence_interval.high - est.predicted_price - expected).abs() < 1e-3);
        assert_eq!(est.market_rate_range, ValueRange::new(500.0, 800.0));
    }

    #[test]
    fn divergent_hardware_trusts_formula() {
        // Benchmark hardware midpoint at score 6 is ₹2000; ₹5000 is 2.5×.
        let est = predict_price(&request(5000.0));
        assert!(est.nonstandard_hardware);
        assert_eq!(est.weights, NONSTANDARD_HARDWARE_BLEND);
        assert!((est.formula_price - 29_808.0).abs() < EPS);
        assert!((est.predicted_price - 30_146.4).abs() < EPS);
    }

    #[test]
    fn zero_hardware_keeps_standard_blend() {
        let est = predict_price(&request(0.0));
        assert!(!est.nonstandard_hardware);
        assert_eq!(est.weights, STANDARD_BLEND);
    }

    #[test]
    fn request_validation() {
        let mut req = PriceRequest::default();
        assert!(req.validate().is_ok());
        req.estimated_hours = 0.5;
        assert!(req.validate().is_err());
        req.estimated_hours = 10.0;
        req.total_score = 26;
        assert!(matches!(
            run_predict_price(&req),
            Err(costlens_core::EstimationError::Validation(
                ValidationError::OutOfRange { field: "total_score", .. }
            ))
        ));
    }
}
