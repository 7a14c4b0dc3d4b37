use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::RevenueInputs;
use crate::calculations::common::clamp;

/// How raw calculator inputs are treated before the estimate is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
    /// Values are used exactly as entered, including negative or
    /// out-of-range ones.
    #[default]
    PassThrough,
    /// Negative surplus and price are floored to zero and the sharing
    /// percentage is clamped to `[0, 100]`.
    Clamp,
}

impl InputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::Clamp => "clamp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass-through" | "passthrough" => Some(Self::PassThrough),
            "clamp" => Some(Self::Clamp),
            _ => None,
        }
    }

    /// Applies the policy, returning the inputs the estimator should use.
    pub fn apply(
        &self,
        inputs: RevenueInputs,
    ) -> RevenueInputs {
        match self {
            Self::PassThrough => inputs,
            Self::Clamp => {
                let adjusted = RevenueInputs {
                    daily_surplus_kwh: inputs.daily_surplus_kwh.max(Decimal::ZERO),
                    price_per_kwh: inputs.price_per_kwh.max(Decimal::ZERO),
                    sharing_percentage: clamp(
                        inputs.sharing_percentage,
                        Decimal::ZERO,
                        Decimal::ONE_HUNDRED,
                    ),
                };
                if adjusted != inputs {
                    warn!(
                        original = ?inputs,
                        adjusted = ?adjusted,
                        "calculator inputs clamped to valid range"
                    );
                }
                adjusted
            }
        }
    }
}
