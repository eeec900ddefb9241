//! Full-analysis request.

use serde::{Deserialize, Serialize};

use costlens_core::errors::ValidationError;
use costlens_core::types::{ClientType, RiskFlags};

use crate::validate;

/// Superset request for the orchestrator.
///
/// `hourly_rate` and `hardware_cost` of 0 mean "derive from the benchmarks".
/// Unset `profit_percent` and `client_type` fall back to the pricing config;
/// unset `quoted_price` quotes the predicted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullAnalysisRequest {
    pub description: String,
    pub hardware_score: i64,
    pub software_score: i64,
    pub ai_ml_score: i64,
    pub deployment_score: i64,
    pub risk_safety_score: i64,
    pub hourly_rate: f64,
    pub hardware_cost: f64,
    pub profit_percent: Option<f64>,
    pub client_type: Option<ClientType>,
    #[serde(flatten)]
    pub flags: RiskFlags,
    pub quoted_price: Option<f64>,
}

impl Default for FullAnalysisRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            hardware_score: 1,
            software_score: 1,
            ai_ml_score: 0,
            deployment_score: 1,
            risk_safety_score: 1,
            hourly_rate: 0.0,
            hardware_cost: 0.0,
            profit_percent: None,
            client_type: None,
            flags: RiskFlags::NONE,
            quoted_price: None,
        }
    }
}

impl FullAnalysisRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::dimension("hardware_score", self.hardware_score)?;
        validate::dimension("software_score", self.software_score)?;
        validate::dimension("ai_ml_score", self.ai_ml_score)?;
        validate::dimension("deployment_score", self.deployment_score)?;
        validate::dimension("risk_safety_score", self.risk_safety_score)?;
        validate::non_negative("hourly_rate", self.hourly_rate)?;
        validate::non_negative("hardware_cost", self.hardware_cost)?;
        if let Some(profit) = self.profit_percent {
            validate::non_negative("profit_percent", profit)?;
        }
        if let Some(quoted) = self.quoted_price {
            validate::non_negative("quoted_price", quoted)?;
        }
        Ok(())
    }
}
