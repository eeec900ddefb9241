use serde::Serialize;

use crate::types::{ClientType, DimensionScores, RiskFlags, Tier, ValueRange};

/// A reference market project (India, 2026 prices in rupees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub id: u32,
    pub name: &'static str,
    pub tier: Tier,
    pub score: u32,
    pub dimensions: DimensionScores,
    pub hardware_cost: ValueRange,
    pub hours: ValueRange,
    /// Hourly rate in rupees.
    pub rate: f64,
    pub total_cost: ValueRange,
    pub client_type: ClientType,
    pub flags: RiskFlags,
}

const fn dims(
    hardware: u8,
    software: u8,
    ai_ml: u8,
    deployment: u8,
    risk_safety: u8,
) -> DimensionScores {
    DimensionScores {
        hardware,
        software,
        ai_ml,
        deployment,
        risk_safety,
    }
}

/// Interpolation grid. Must stay strictly increasing by `score`.
static MARKET_BENCHMARKS: [Benchmark; 10] = [
    Benchmark {
        id: 1,
        name: "WiFi Temperature Monitoring (Student)",
        tier: Tier::Normal,
        score: 4,
        dimensions: dims(1, 1, 0, 1, 1),
        hardware_cost: ValueRange::new(900.0, 1200.0),
        hours: ValueRange::new(25.0, 40.0),
        rate: 500.0,
        total_cost: ValueRange::new(15_000.0, 22_000.0),
        client_type: ClientType::Student,
        flags: RiskFlags::NONE,
    },
    Benchmark {
        id: 2,
        name: "Smart Soil Moisture Monitoring (Basic+)",
        tier: Tier::Normal,
        score: 6,
        dimensions: dims(1, 2, 0, 2, 1),
        hardware_cost: ValueRange::new(1500.0, 2500.0),
        hours: ValueRange::new(35.0, 50.0),
        rate: 600.0,
        total_cost: ValueRange::new(25_000.0, 38_000.0),
        client_type: ClientType::Startup,
        flags: RiskFlags::NONE,
    },
    Benchmark {
        id: 3,
        name: "Smart Home Automation (Moderate)",
        tier: Tier::Moderate,
        score: 9,
        dimensions: dims(2, 2, 0, 3, 2),
        hardware_cost: ValueRange::new(3000.0, 5000.0),
        hours: ValueRange::new(60.0, 90.0),
        rate: 800.0,
        total_cost: ValueRange::new(55_000.0, 85_000.0),
        client_type: ClientType::Startup,
        flags: RiskFlags {
            safety_critical: false,
            has_ai: false,
            custom_pcb: true,
            large_scale: false,
        },
    },
    Benchmark {
        id: 4,
        name: "IoT Attendance System with RFID",
        tier: Tier::Moderate,
        score: 10,
        dimensions: dims(2, 3, 0, 3, 2),
        hardware_cost: ValueRange::new(4000.0, 7000.0),
        hours: ValueRange::new(70.0, 100.0),
        rate: 900.0,
        total_cost: ValueRange::new(70_000.0, 100_000.0),
        client_type: ClientType::Startup,
        flags: RiskFlags {
            safety_critical: false,
            has_ai: false,
            custom_pcb: true,
            large_scale: false,
        },
    },
    Benchmark {
        id: 5,
        name: "Smart Irrigation System (Moderate+)",
        tier: Tier::Moderate,
        score: 12,
        dimensions: dims(3, 3, 0, 4, 2),
        hardware_cost: ValueRange::new(15_000.0, 30_000.0),
        hours: ValueRange::new(90.0, 140.0),
        rate: 1000.0,
        total_cost: ValueRange::new(120_000.0, 170_000.0),
        client_type: ClientType::Sme,
        flags: RiskFlags {
            safety_critical: false,
            has_ai: false,
            custom_pcb: false,
            large_scale: true,
        },
    },
    Benchmark {
        id: 6,
        name: "AI Face Recognition Door Access",
        tier: Tier::High,
        score: 14,
        dimensions: dims(3, 3, 4, 2, 2),
        hardware_cost: ValueRange::new(8000.0, 15_000.0),
        hours: ValueRange::new(120.0, 180.0),
        rate: 1200.0,
        total_cost: ValueRange::new(160_000.0, 240_000.0),
        client_type: ClientType::Startup,
        flags: RiskFlags {
            safety_critical: false,
            has_ai: true,
            custom_pcb: true,
            large_scale: false,
        },
    },
    Benchmark {
        id: 7,
        name: "Warehouse Environmental Monitoring",
        tier: Tier::High,
        score: 16,
        dimensions: dims(4, 3, 0, 5, 4),
        hardware_cost: ValueRange::new(120_000.0, 250_000.0),
        hours: ValueRange::new(180.0, 250.0),
        rate: 1500.0,
        total_cost: ValueRange::new(400_000.0, 600_000.0),
        client_type: ClientType::Enterprise,
        flags: RiskFlags {
            safety_critical: true,
            has_ai: false,
            custom_pcb: true,
            large_scale: true,
        },
    },
    Benchmark {
        id: 8,
        name: "AI CCTV Surveillance System",
        tier: Tier::High,
        score: 17,
        dimensions: dims(3, 4, 5, 3, 2),
        hardware_cost: ValueRange::new(200_000.0, 400_000.0),
        hours: ValueRange::new(200.0, 300.0),
        rate: 1800.0,
        total_cost: ValueRange::new(600_000.0, 1_000_000.0),
        client_type: ClientType::Enterprise,
        flags: RiskFlags {
            safety_critical: false,
            has_ai: true,
            custom_pcb: false,
            large_scale: true,
        },
    },
    Benchmark {
        id: 9,
        name: "Industrial Motor Predictive Maintenance",
        tier: Tier::Industrial,
        score: 20,
        dimensions: dims(4, 4, 5, 4, 3),
        hardware_cost: ValueRange::new(300_000.0, 600_000.0),
        hours: ValueRange::new(250.0, 400.0),
        rate: 2000.0,
        total_cost: ValueRange::new(800_000.0, 1_400_000.0),
        client_type: ClientType::Enterprise,
        flags: RiskFlags::ALL,
    },
    Benchmark {
        id: 10,
        name: "Smart Factory Energy Optimization",
        tier: Tier::Industrial,
        score: 23,
        dimensions: dims(5, 5, 5, 5, 3),
        hardware_cost: ValueRange::new(500_000.0, 1_000_000.0),
        hours: ValueRange::new(350.0, 600.0),
        rate: 2500.0,
        total_cost: ValueRange::new(1_500_000.0, 2_500_000.0),
        client_type: ClientType::Enterprise,
        flags: RiskFlags::ALL,
    },
];

/// The benchmark table, ascending by score.
pub fn benchmarks() -> &'static [Benchmark] {
    &MARKET_BENCHMARKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_strictly_increasing() {
        assert!(benchmarks().windows(2).all(|w| w[0].score < w[1].score));
    }

    #[test]
    fn recorded_score_matches_dimensions() {
        for b in benchmarks() {
            assert_eq!(b.dimensions.total(), b.score, "benchmark {}", b.id);
            assert_eq!(Tier::from_score(b.score), b.tier, "benchmark {}", b.id);
        }
    }
}
