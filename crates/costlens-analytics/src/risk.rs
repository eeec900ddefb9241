//! Additive, capped delivery-risk percentage.

use serde::Serialize;

use costlens_core::constants::{
    AI_RISK_PERCENT, BASE_RISK_PERCENT, CUSTOM_PCB_RISK_PERCENT, LARGE_SCALE_RISK_PERCENT,
    MAX_RISK_PERCENT, SAFETY_CRITICAL_RISK_PERCENT,
};
use costlens_core::types::RiskFlags;

/// One term of the risk sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskContribution {
    pub label: &'static str,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_percent: f64,
    /// Contributing terms in evaluation order, base first.
    pub breakdown: Vec<RiskContribution>,
    pub capped: bool,
}

/// Base 8% plus one add-on per raised flag, capped at 35%.
pub fn calculate_risk(flags: &RiskFlags) -> RiskAssessment {
    let addons = [
        (flags.safety_critical, "Safety critical", SAFETY_CRITICAL_RISK_PERCENT),
        (flags.has_ai, "AI/ML involved", AI_RISK_PERCENT),
        (flags.custom_pcb, "Custom PCB", CUSTOM_PCB_RISK_PERCENT),
        (flags.large_scale, "Large-scale deployment", LARGE_SCALE_RISK_PERCENT),
    ];

    let mut breakdown = vec![RiskContribution {
        label: "Base risk",
        percent: BASE_RISK_PERCENT,
    }];
    breakdown.extend(
        addons
            .into_iter()
            .filter(|(raised, _, _)| *raised)
            .map(|(_, label, percent)| RiskContribution { label, percent }),
    );

    let risk_percent = breakdown
        .iter()
        .map(|c| c.percent)
        .sum::<f64>()
        .min(MAX_RISK_PERCENT);

    RiskAssessment {
        risk_percent,
        breakdown,
        capped: risk_percent >= MAX_RISK_PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_base_risk() {
        let risk = calculate_risk(&RiskFlags::NONE);
        assert_eq!(risk.risk_percent, 8.0);
        assert!(!risk.capped);
        assert_eq!(risk.breakdown.len(), 1);
        assert_eq!(risk.breakdown[0].label, "Base risk");
    }

    #[test]
    fn all_flags_sum_below_cap() {
        let risk = calculate_risk(&RiskFlags::ALL);
        assert_eq!(risk.risk_percent, 23.0);
        assert!(!risk.capped);
        let labels: Vec<&str> = risk.breakdown.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Base risk", "Safety critical", "AI/ML involved", "Custom PCB", "Large-scale deployment"]
        );
    }

    #[test]
    fn single_flag() {
        let risk = calculate_risk(&RiskFlags {
            has_ai: true,
            ..Default::default()
        });
        assert_eq!(risk.risk_percent, 12.0);
        assert_eq!(risk.breakdown[1].percent, 4.0);
    }
}
