//! Property-based tests for the estimation components.

use proptest::prelude::*;

use costlens_analytics::acceptance::{acceptance, acceptance_probability};
use costlens_analytics::complexity::compute_complexity_score;
use costlens_analytics::interpolation::{interpolate, interpolate_range, BenchmarkField};
use costlens_analytics::optimizer::optimize_profit;
use costlens_analytics::simulation::{CostModel, MonteCarloSimulator};
use costlens_core::reference::benchmarks;
use costlens_core::types::{ClientType, Tier};

fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

fn client_strategy() -> impl Strategy<Value = ClientType> {
    prop::sample::select(vec![
        ClientType::Student,
        ClientType::Startup,
        ClientType::Sme,
        ClientType::Enterprise,
        ClientType::Other,
    ])
}

proptest! {
    #[test]
    fn total_score_is_bounded(
        hw in any::<i64>(), sw in any::<i64>(), ai in any::<i64>(),
        dep in any::<i64>(), rs in any::<i64>(),
    ) {
        let score = compute_complexity_score(hw, sw, ai, dep, rs);
        prop_assert!(score.total_score <= 25);
        prop_assert_eq!(score.tier, Tier::from_score(score.total_score));
    }

    #[test]
    fn acceptance_is_bounded(
        quoted in 0.0f64..10_000_000.0,
        optimal in 0.0f64..10_000_000.0,
        tier in tier_strategy(),
        client in client_strategy(),
        risk in 0.0f64..100.0,
    ) {
        let result = acceptance(quoted, optimal, tier, client, risk);
        prop_assert!((0.05..=0.95).contains(&result.probability));
        for point in &result.curve {
            prop_assert!((0.05..=0.95).contains(&point.probability));
        }
    }

    #[test]
    fn acceptance_never_rises_with_price(
        r in 0.1f64..3.0,
        tier in tier_strategy(),
        client in client_strategy(),
        risk in 0.0f64..40.0,
    ) {
        // Only the enterprise and SME rules change at r = 1, and both step down.
        let lower = acceptance_probability(r, tier, client, risk);
        let higher = acceptance_probability(r + 0.05, tier, client, risk);
        prop_assert!(higher <= lower + 1e-12);
    }

    #[test]
    fn hours_interpolation_is_monotonic(score in 0u32..25) {
        let a = interpolate_range(score, BenchmarkField::Hours);
        let b = interpolate_range(score + 1, BenchmarkField::Hours);
        prop_assert!(a.low <= b.low && a.high <= b.high);
        prop_assert!(interpolate(score, BenchmarkField::Rate) <= interpolate(score + 1, BenchmarkField::Rate));
    }

    #[test]
    fn interpolation_stays_within_neighbours(score in 0u32..=30) {
        let grid = benchmarks();
        let rate = interpolate(score, BenchmarkField::Rate);
        let min = grid.first().map(|b| b.rate).unwrap_or(0.0);
        let max = grid.last().map(|b| b.rate).unwrap_or(0.0);
        prop_assert!(rate >= min && rate <= max);
    }

    #[test]
    fn optimizer_returns_sweep_argmax(
        base_cost in 0.0f64..5_000_000.0,
        tier in tier_strategy(),
        client in client_strategy(),
        risk in 0.0f64..40.0,
    ) {
        let opt = optimize_profit(base_cost, tier, client, risk);
        prop_assert!((5..=40).contains(&opt.optimal_margin));
        prop_assert!(opt.sweep.iter().all(|p| p.expected_revenue <= opt.optimal_revenue));
        let again = optimize_profit(base_cost, tier, client, risk);
        prop_assert_eq!(opt.optimal_margin, again.optimal_margin);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn simulation_percentiles_are_ordered(
        base_hours in 1.0f64..600.0,
        hourly_rate in 0.0f64..3000.0,
        hardware_cost in 0.0f64..1_000_000.0,
        risk in 0.0f64..35.0,
        has_ai in any::<bool>(),
        custom_pcb in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let model = CostModel {
            base_hours,
            hourly_rate,
            hardware_cost,
            risk_percent: risk,
            has_ai,
            custom_pcb,
            ..Default::default()
        };
        let sim = MonteCarloSimulator::new(300).with_seed(seed);
        let result = sim.simulate(&model).unwrap();
        prop_assert!(result.percentiles.is_ordered());
        prop_assert!(result.min <= result.mean && result.mean <= result.max);
        prop_assert!((0.0..=1.0).contains(&result.overrun_probability));
        prop_assert_eq!(result.histogram.frequency.iter().sum::<u32>(), 300);
        prop_assert_eq!(result, sim.simulate(&model).unwrap());
    }
}
