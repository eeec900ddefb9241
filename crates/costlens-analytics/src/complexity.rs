//! Structured complexity scoring.

use serde::{Deserialize, Serialize};

use costlens_core::constants::MAX_DIMENSION_SCORE;
use costlens_core::errors::ValidationError;
use costlens_core::types::{DimensionScores, Tier};
use costlens_core::EstimationResult;

use crate::validate;

/// Clamped dimensions with their total and tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityScore {
    pub scores: DimensionScores,
    pub total_score: u32,
    pub tier: Tier,
}

/// Saturate any integer into `[0, 5]`.
pub fn clamp_dimension(value: i64) -> u8 {
    // Lossless: the clamp keeps the value within u8.
    value.clamp(0, MAX_DIMENSION_SCORE) as u8
}

/// Score a project. Out-of-range inputs are clamped silently; never fails.
pub fn compute_complexity_score(
    hardware: i64,
    software: i64,
    ai_ml: i64,
    deployment: i64,
    risk_safety: i64,
) -> ComplexityScore {
    let scores = DimensionScores {
        hardware: clamp_dimension(hardware),
        software: clamp_dimension(software),
        ai_ml: clamp_dimension(ai_ml),
        deployment: clamp_dimension(deployment),
        risk_safety: clamp_dimension(risk_safety),
    };
    let total_score = scores.total();
    ComplexityScore {
        scores,
        total_score,
        tier: Tier::from_score(total_score),
    }
}

/// Chart-ready view of the 5 dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityRadar {
    pub labels: [&'static str; 5],
    pub scores: [u8; 5],
    /// Mean dimension score, one decimal.
    pub overall_score: f64,
    pub total_score: u32,
    pub tier: Tier,
}

pub fn complexity_radar(scores: &DimensionScores) -> ComplexityRadar {
    let values = scores.as_array();
    let total_score = scores.total();
    let mean = f64::from(total_score) / values.len() as f64;
    ComplexityRadar {
        labels: DimensionScores::LABELS,
        scores: values,
        overall_score: (mean * 10.0).round_ties_even() / 10.0,
        total_score,
        tier: Tier::from_score(total_score),
    }
}

/// Standalone scoring request. Each dimension must lie in `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityRequest {
    pub hardware: i64,
    pub software: i64,
    pub ai_ml: i64,
    pub deployment: i64,
    pub risk_safety: i64,
}

impl Default for ComplexityRequest {
    fn default() -> Self {
        Self {
            hardware: 1,
            software: 1,
            ai_ml: 0,
            deployment: 1,
            risk_safety: 1,
        }
    }
}

impl ComplexityRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::dimension("hardware", self.hardware)?;
        validate::dimension("software", self.software)?;
        validate::dimension("ai_ml", self.ai_ml)?;
        validate::dimension("deployment", self.deployment)?;
        validate::dimension("risk_safety", self.risk_safety)
    }
}

pub fn run_complexity_score(request: &ComplexityRequest) -> EstimationResult<ComplexityScore> {
    request.validate()?;
    Ok(compute_complexity_score(
        request.hardware,
        request.software,
        request.ai_ml,
        request.deployment,
        request.risk_safety,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_dimensions() {
        let score = compute_complexity_score(-3, 9, 2, 5, 0);
        assert_eq!(score.scores.as_array(), [0, 5, 2, 5, 0]);
        assert_eq!(score.total_score, 12);
        assert_eq!(score.tier, Tier::Moderate);
    }

    #[test]
    fn extremes() {
        assert_eq!(compute_complexity_score(0, 0, 0, 0, 0).total_score, 0);
        let max = compute_complexity_score(i64::MAX, 5, 5, 5, 5);
        assert_eq!(max.total_score, 25);
        assert_eq!(max.tier, Tier::Industrial);
    }

    #[test]
    fn radar_reports_one_decimal_mean() {
        let score = compute_complexity_score(3, 4, 5, 3, 2);
        let radar = complexity_radar(&score.scores);
        assert_eq!(radar.labels[2], "AI/ML");
        assert_eq!(radar.scores, [3, 4, 5, 3, 2]);
        assert_eq!(radar.total_score, 17);
        assert_eq!(radar.overall_score, 3.4);
        assert_eq!(radar.tier, Tier::High);
    }

    #[test]
    fn request_rejects_out_of_range_dimension() {
        let request = ComplexityRequest {
            ai_ml: 6,
            ..Default::default()
        };
        match request.validate() {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "ai_ml"),
            other => panic!("Expected OutOfRange, got: {:?}", other),
        }
        assert!(run_complexity_score(&request).is_err());
    }

    #[test]
    fn default_request_scores_four() {
        let score = run_complexity_score(&ComplexityRequest::default()).unwrap();
        assert_eq!(score.total_score, 4);
        assert_eq!(score.tier, Tier::Normal);
    }
}
