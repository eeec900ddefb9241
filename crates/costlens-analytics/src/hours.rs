//! Engineering-hours estimation.

use serde::Serialize;

use costlens_core::types::{Tier, ValueRange};

use crate::interpolation::{interpolate_range, BenchmarkField};

/// Weight of the benchmark midpoint in the blended estimate.
pub const BENCHMARK_WEIGHT: f64 = 0.7;
/// Weight of the tier-formula midpoint in the blended estimate.
pub const FORMULA_WEIGHT: f64 = 0.3;
/// Hours added per point of total score by the tier formula.
pub const HOURS_PER_SCORE_POINT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoursEstimate {
    /// Interpolated benchmark hour bounds, unrounded.
    pub benchmark_range: ValueRange,
    /// Tier midpoint plus 2h per score point, clamped into the tier range.
    pub formula_midpoint: f64,
    /// Blended estimate, whole hours.
    pub estimated_hours: u32,
}

impl HoursEstimate {
    pub fn hours(&self) -> f64 {
        f64::from(self.estimated_hours)
    }
}

/// Blend 70% benchmark midpoint with 30% tier formula, rounded half-to-even.
pub fn estimate_hours(total_score: u32, tier: Tier) -> HoursEstimate {
    let benchmark_range = interpolate_range(total_score, BenchmarkField::Hours);

    let tier_hours = tier.hours_range();
    let formula_midpoint =
        tier_hours.clamp(tier_hours.midpoint() + f64::from(total_score) * HOURS_PER_SCORE_POINT);

    let blended =
        BENCHMARK_WEIGHT * benchmark_range.midpoint() + FORMULA_WEIGHT * formula_midpoint;

    HoursEstimate {
        benchmark_range,
        formula_midpoint,
        // Non-negative and bounded by the largest tier range.
        estimated_hours: blended.round_ties_even() as u32,
    }
}
