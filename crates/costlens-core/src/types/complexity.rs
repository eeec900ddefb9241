use serde::{Deserialize, Serialize};

use crate::constants::DIMENSION_COUNT;

/// The 5 complexity dimensions, each already clamped to `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub hardware: u8,
    pub software: u8,
    pub ai_ml: u8,
    pub deployment: u8,
    pub risk_safety: u8,
}

impl DimensionScores {
    /// Dimension labels, in `as_array` order.
    pub const LABELS: [&'static str; DIMENSION_COUNT] =
        ["Hardware", "Software", "AI/ML", "Deployment", "Risk & Safety"];

    pub fn as_array(&self) -> [u8; DIMENSION_COUNT] {
        [
            self.hardware,
            self.software,
            self.ai_ml,
            self.deployment,
            self.risk_safety,
        ]
    }

    /// Sum of all dimensions, in `[0, 25]`.
    pub fn total(&self) -> u32 {
        self.as_array().iter().map(|&v| u32::from(v)).sum()
    }
}

/// Capability flags that add delivery risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFlags {
    pub safety_critical: bool,
    pub has_ai: bool,
    pub custom_pcb: bool,
    pub large_scale: bool,
}

impl RiskFlags {
    pub const NONE: RiskFlags = RiskFlags {
        safety_critical: false,
        has_ai: false,
        custom_pcb: false,
        large_scale: false,
    };

    pub const ALL: RiskFlags = RiskFlags {
        safety_critical: true,
        has_ai: true,
        custom_pcb: true,
        large_scale: true,
    };
}
