//! Complexity tiers and their market ranges.

use serde::{Deserialize, Serialize};

use super::range::ValueRange;

/// Coarse complexity bucket derived from the total complexity score.
///
/// | Tier | Score | Hours | Rate (₹/hr) | Total cost (₹) |
/// |------|-------|-------|-------------|----------------|
/// | Normal | 0–6 | 25–50 | 500–800 | 15K–40K |
/// | Moderate | 7–12 | 60–140 | 800–1200 | 55K–170K |
/// | High | 13–18 | 120–300 | 1200–2000 | 150K–1M |
/// | Industrial | 19–25 | 250–600 | 2000–2500 | 800K–2.5M |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    Normal,
    Moderate,
    High,
    Industrial,
}

impl Tier {
    /// All 4 tiers, lowest first.
    pub const ALL: [Tier; 4] = [Self::Normal, Self::Moderate, Self::High, Self::Industrial];

    /// Classify a total score. Scores above 25 saturate to `Industrial`.
    pub fn from_score(score: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| {
                let (lo, hi) = tier.score_range();
                (lo..=hi).contains(&score)
            })
            .unwrap_or(Self::Industrial)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Industrial => "Industrial",
        }
    }

    /// Inclusive total-score bounds of this tier.
    pub fn score_range(&self) -> (u32, u32) {
        match self {
            Self::Normal => (0, 6),
            Self::Moderate => (7, 12),
            Self::High => (13, 18),
            Self::Industrial => (19, 25),
        }
    }

    /// Typical engineering hours for a project of this tier.
    pub fn hours_range(&self) -> ValueRange {
        match self {
            Self::Normal => ValueRange::new(25.0, 50.0),
            Self::Moderate => ValueRange::new(60.0, 140.0),
            Self::High => ValueRange::new(120.0, 300.0),
            Self::Industrial => ValueRange::new(250.0, 600.0),
        }
    }

    /// Market hourly rate range (₹/hr).
    pub fn market_rate_range(&self) -> ValueRange {
        match self {
            Self::Normal => ValueRange::new(500.0, 800.0),
            Self::Moderate => ValueRange::new(800.0, 1200.0),
            Self::High => ValueRange::new(1200.0, 2000.0),
            Self::Industrial => ValueRange::new(2000.0, 2500.0),
        }
    }

    /// Market total project cost range (₹).
    pub fn total_cost_range(&self) -> ValueRange {
        match self {
            Self::Normal => ValueRange::new(15_000.0, 40_000.0),
            Self::Moderate => ValueRange::new(55_000.0, 170_000.0),
            Self::High => ValueRange::new(150_000.0, 1_000_000.0),
            Self::Industrial => ValueRange::new(800_000.0, 2_500_000.0),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
