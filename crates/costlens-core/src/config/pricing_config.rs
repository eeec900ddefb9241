//! Pricing defaults.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::ClientType;

/// Defaults applied to pipeline requests that leave pricing inputs unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PricingConfig {
    /// Profit margin in percent. Default: 20.
    pub default_profit_percent: Option<f64>,
    /// Client type label. Default: "startup".
    pub default_client_type: Option<String>,
}

impl PricingConfig {
    pub fn effective_profit_percent(&self) -> f64 {
        self.default_profit_percent
            .unwrap_or(constants::DEFAULT_PROFIT_PERCENT)
    }

    /// Parsed client type; unrecognised labels become `ClientType::Other`.
    pub fn effective_client_type(&self) -> ClientType {
        ClientType::parse(
            self.default_client_type
                .as_deref()
                .unwrap_or(constants::DEFAULT_CLIENT_TYPE),
        )
    }
}
