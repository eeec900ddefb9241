//! Piecewise-linear interpolation over the benchmark grid.
//!
//! The grid is the benchmark table, ascending by score. A score that hits a
//! grid point returns the stored value; a score between two grid points is
//! interpolated linearly; a score outside the grid reuses the nearest
//! endpoint (no extrapolation).

use costlens_core::reference::{benchmarks, Benchmark};
use costlens_core::types::ValueRange;

/// Which end of a ranged benchmark field to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Low,
    High,
}

/// A benchmark field that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkField {
    Hours(Bound),
    HardwareCost(Bound),
    TotalCost(Bound),
    Rate,
}

impl BenchmarkField {
    /// Read this field from one benchmark.
    pub fn extract(self, benchmark: &Benchmark) -> f64 {
        match self {
            Self::Hours(bound) => pick(benchmark.hours, bound),
            Self::HardwareCost(bound) => pick(benchmark.hardware_cost, bound),
            Self::TotalCost(bound) => pick(benchmark.total_cost, bound),
            Self::Rate => benchmark.rate,
        }
    }
}

fn pick(range: ValueRange, bound: Bound) -> f64 {
    match bound {
        Bound::Low => range.low,
        Bound::High => range.high,
    }
}

/// Linear interpolation of `x` between `(x0, y0)` and `(x1, y1)`.
/// Degenerate spans (`x0 == x1`) return the mean of `y0` and `y1`.
pub fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x1 == x0 {
        return (y0 + y1) / 2.0;
    }
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Interpolate `field` at `score` over an arbitrary grid sorted by score.
/// An empty grid yields 0.
pub fn interpolate_in(grid: &[Benchmark], score: u32, field: BenchmarkField) -> f64 {
    let (Some(first), Some(last)) = (grid.first(), grid.last()) else {
        return 0.0;
    };

    if let Some(exact) = grid.iter().find(|b| b.score == score) {
        return field.extract(exact);
    }

    let (lower, upper) = if score < first.score {
        (first, first)
    } else if score > last.score {
        (last, last)
    } else {
        let idx = grid.partition_point(|b| b.score < score);
        (&grid[idx - 1], &grid[idx])
    };

    lerp(
        f64::from(score),
        f64::from(lower.score),
        f64::from(upper.score),
        field.extract(lower),
        field.extract(upper),
    )
}

/// Interpolate `field` at `score` over the market benchmark table.
pub fn interpolate(score: u32, field: BenchmarkField) -> f64 {
    interpolate_in(benchmarks(), score, field)
}

/// Interpolate both bounds of a ranged field.
///
/// ```
/// use costlens_analytics::interpolation::{interpolate_range, BenchmarkField};
///
/// let hours = interpolate_range(6, BenchmarkField::Hours);
/// assert_eq!((hours.low, hours.high), (35.0, 50.0));
/// ```
pub fn interpolate_range(score: u32, field: fn(Bound) -> BenchmarkField) -> ValueRange {
    ValueRange::new(
        interpolate(score, field(Bound::Low)),
        interpolate(score, field(Bound::High)),
    )
}

/// The `n` benchmarks closest in score; ties keep table order.
pub fn nearest_benchmarks(score: u32, n: usize) -> Vec<&'static Benchmark> {
    let mut ranked: Vec<&'static Benchmark> = benchmarks().iter().collect();
    ranked.sort_by_key(|b| b.score.abs_diff(score));
    ranked.truncate(n);
    ranked
}
