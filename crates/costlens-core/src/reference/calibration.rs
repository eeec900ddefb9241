use serde::Serialize;

use crate::types::Tier;

/// A historical project with an observed acceptance rate, used to fit the
/// logistic acceptance curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationAnchor {
    pub name: &'static str,
    pub score: u32,
    pub tier: Tier,
    /// Observed acceptance, in percent.
    pub acceptance_percent: u8,
}

const fn anchor(
    name: &'static str,
    score: u32,
    tier: Tier,
    acceptance_percent: u8,
) -> CalibrationAnchor {
    CalibrationAnchor {
        name,
        score,
        tier,
        acceptance_percent,
    }
}

static CALIBRATION_ANCHORS: [CalibrationAnchor; 15] = [
    anchor("Basic Temp Monitor (Student)", 5, Tier::Normal, 85),
    anchor("Basic Soil Monitor (Small farm)", 9, Tier::Moderate, 70),
    anchor("IoT + Dashboard + Alerts (Startup)", 11, Tier::Moderate, 65),
    anchor("AI Face Recognition Door Lock", 14, Tier::High, 55),
    anchor("Industrial Motor Predictive Maintenance", 20, Tier::Industrial, 40),
    anchor("Custom PCB + IoT + OTA", 13, Tier::High, 50),
    anchor("ESP8266 Academic Weather Station", 4, Tier::Normal, 90),
    anchor("Multi-device Warehouse Monitoring", 12, Tier::Moderate, 60),
    anchor("AI-based CCTV Surveillance (Enterprise)", 17, Tier::High, 45),
    anchor("Simple Home Automation (Student)", 6, Tier::Normal, 80),
    anchor("Startup MVP IoT SaaS", 15, Tier::High, 55),
    anchor("Industrial Gas Monitoring (Safety Critical)", 18, Tier::High, 50),
    anchor("Smart Irrigation (Medium Farm)", 10, Tier::Moderate, 70),
    anchor("AI Drone Monitoring System", 21, Tier::Industrial, 35),
    anchor("Firebase Data Logger (Academic)", 5, Tier::Normal, 88),
];

/// The 15 calibration anchors, in their recorded order.
pub fn calibration_anchors() -> &'static [CalibrationAnchor] {
    &CALIBRATION_ANCHORS
}
