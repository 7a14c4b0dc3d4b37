//! Interactive calculator session.
//!
//! A [`RevenueCalculator`] holds the inputs of one open calculator view.
//! Every call to [`RevenueCalculator::estimate`] recomputes from the current
//! inputs; nothing is cached between edits.

use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    RevenueError, RevenueEstimate, RevenueEstimator, RevenueEstimatorConfig, RevenueInputs,
    Section,
};

/// Delay between closing the calculator and scrolling to the contact form.
pub const PROCEED_SCROLL_DELAY: Duration = Duration::from_millis(300);

/// What the parent view should do after the user chooses to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProceedRequest {
    /// The calculator asks its owner to close it.
    pub close: bool,
    /// Section to scroll to once closed.
    pub navigate_to: Section,
    /// How long to wait after closing before scrolling.
    pub delay: Duration,
}

/// State of one open calculator view.
#[derive(Debug, Clone, Default)]
pub struct RevenueCalculator {
    inputs: RevenueInputs,
    estimator: RevenueEstimator,
}

impl RevenueCalculator {
    /// Opens a calculator with the default inputs (8 kWh, 200 per kWh, 40 %).
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a calculator with the given starting inputs and estimator
    /// configuration.
    pub fn with_config(
        inputs: RevenueInputs,
        config: RevenueEstimatorConfig,
    ) -> Self {
        Self {
            inputs,
            estimator: RevenueEstimator::new(config),
        }
    }

    pub fn inputs(&self) -> &RevenueInputs {
        &self.inputs
    }

    pub fn set_daily_surplus(
        &mut self,
        value: Decimal,
    ) {
        debug!(%value, "daily surplus changed");
        self.inputs.daily_surplus_kwh = value;
    }

    pub fn set_price_per_kwh(
        &mut self,
        value: Decimal,
    ) {
        debug!(%value, "price per kWh changed");
        self.inputs.price_per_kwh = value;
    }

    /// Sets the sharing percentage. The bound `[0, 100]` is only enforced
    /// when the estimator uses [`crate::InputPolicy::Clamp`].
    pub fn set_sharing_percentage(
        &mut self,
        value: Decimal,
    ) {
        debug!(%value, "sharing percentage changed");
        self.inputs.sharing_percentage = value;
    }

    /// Computes the estimate for the current inputs.
    pub fn estimate(&self) -> Result<RevenueEstimate, RevenueError> {
        self.estimator.calculate(&self.inputs)
    }

    /// The user asked to learn more: close and head to the contact form.
    pub fn on_proceed(&self) -> ProceedRequest {
        info!(
            target_section = Section::Contact.as_str(),
            "calculator proceed requested"
        );
        ProceedRequest {
            close: true,
            navigate_to: Section::Contact,
            delay: PROCEED_SCROLL_DELAY,
        }
    }
}
