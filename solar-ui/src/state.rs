//! Application state for the estimator front end.
//!
//! Owns the page-level values the calculator itself does not manage: the
//! theme, which section is in view, and whether the calculator is open.

use std::collections::HashMap;

use solar_core::visibility::{ThresholdVisibility, VisibilitySignal};
use solar_core::{
    ProceedRequest, RevenueCalculator, RevenueEstimatorConfig, RevenueInputs, Section, ThemeMode,
};
use tracing::{debug, info};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Active colour scheme.
    pub theme: ThemeMode,
    /// Section currently scrolled into view.
    pub current_section: Section,
    /// Suffix for revenue figures.
    pub currency_unit: String,

    /// Open calculator, if any. Dropped (with its inputs) on close.
    calculator: Option<RevenueCalculator>,
    /// Navigation requested by the calculator, applied after its delay.
    pending_navigation: Option<ProceedRequest>,
    /// Reveal state per section; a section is revealed once scrolled to.
    reveals: HashMap<Section, ThresholdVisibility>,

    defaults: RevenueInputs,
    estimator_config: RevenueEstimatorConfig,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let mut state = Self {
            theme: config.theme,
            current_section: Section::Hero,
            currency_unit: config.currency_unit.clone(),
            calculator: None,
            pending_navigation: None,
            reveals: HashMap::new(),
            defaults: config.defaults,
            estimator_config: config.estimator_config(),
        };
        state.navigate(Section::Hero);
        state
    }

    /// Whether `section` has been scrolled into view at least once.
    pub fn is_revealed(
        &self,
        section: Section,
    ) -> bool {
        self.reveals
            .get(&section)
            .is_some_and(|signal| signal.is_visible())
    }

    pub fn is_calculator_open(&self) -> bool {
        self.calculator.is_some()
    }

    pub fn calculator(&self) -> Option<&RevenueCalculator> {
        self.calculator.as_ref()
    }

    pub fn calculator_mut(&mut self) -> Option<&mut RevenueCalculator> {
        self.calculator.as_mut()
    }

    /// Opens the calculator from the earnings section with fresh default
    /// inputs. An already open calculator is left untouched.
    pub fn open_calculator(&mut self) -> &mut RevenueCalculator {
        self.navigate(Section::Earnings);
        let (defaults, config) = (self.defaults, self.estimator_config);
        self.calculator.get_or_insert_with(|| {
            info!("calculator opened");
            RevenueCalculator::with_config(defaults, config)
        })
    }

    /// Closes the calculator and discards its inputs.
    pub fn close_calculator(&mut self) {
        if self.calculator.take().is_some() {
            info!("calculator closed");
        }
    }

    /// Handles the calculator's proceed action: closes it and queues the
    /// scroll it asked for. Returns `None` when no calculator is open.
    pub fn proceed(&mut self) -> Option<ProceedRequest> {
        let request = self.calculator.as_ref()?.on_proceed();
        if request.close {
            self.close_calculator();
        }
        self.pending_navigation = Some(request);
        Some(request)
    }

    pub fn pending_navigation(&self) -> Option<&ProceedRequest> {
        self.pending_navigation.as_ref()
    }

    /// Applies a queued navigation once its delay has elapsed.
    pub fn complete_navigation(&mut self) -> Option<Section> {
        let request = self.pending_navigation.take()?;
        self.navigate(request.navigate_to);
        Some(request.navigate_to)
    }

    pub fn navigate(
        &mut self,
        section: Section,
    ) {
        debug!(section = section.as_str(), "scrolling to section");
        // A section scrolled to is fully in view.
        self.reveals.entry(section).or_default().observe(1.0);
        self.current_section = section;
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.set_theme(self.theme.toggle())
    }

    pub fn set_theme(
        &mut self,
        theme: ThemeMode,
    ) -> ThemeMode {
        info!(theme = theme.as_str(), "theme changed");
        self.theme = theme;
        theme
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    #[test]
    fn starts_closed_at_hero() {
        let state = state();

        assert!(!state.is_calculator_open());
        assert_eq!(state.current_section, Section::Hero);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn open_uses_configured_defaults() {
        let config = AppConfig {
            defaults: RevenueInputs::new(dec!(10), dec!(150), dec!(100)),
            ..AppConfig::default()
        };
        let mut state = AppState::new(&config);

        let estimate = state.open_calculator().estimate().unwrap();

        assert_eq!(estimate.monthly_revenue, dec!(45000));
        assert_eq!(state.current_section, Section::Earnings);
    }

    #[test]
    fn reopening_starts_from_defaults_again() {
        let mut state = state();
        state.open_calculator().set_daily_surplus(dec!(20));
        state.close_calculator();

        let calculator = state.open_calculator();

        assert_eq!(calculator.inputs().daily_surplus_kwh, dec!(8));
    }

    #[test]
    fn open_twice_keeps_current_inputs() {
        let mut state = state();
        state.open_calculator().set_price_per_kwh(dec!(300));

        let calculator = state.open_calculator();

        assert_eq!(calculator.inputs().price_per_kwh, dec!(300));
    }

    #[test]
    fn proceed_closes_and_queues_contact() {
        let mut state = state();
        state.open_calculator();

        let request = state.proceed().unwrap();

        assert!(!state.is_calculator_open());
        assert_eq!(request.navigate_to, Section::Contact);
        assert_eq!(state.current_section, Section::Earnings);

        assert_eq!(state.complete_navigation(), Some(Section::Contact));
        assert_eq!(state.current_section, Section::Contact);
        assert!(state.pending_navigation().is_none());
    }

    #[test]
    fn proceed_without_calculator_does_nothing() {
        let mut state = state();

        assert_eq!(state.proceed(), None);
        assert_eq!(state.complete_navigation(), None);
    }

    #[test]
    fn sections_are_revealed_once_visited() {
        let mut state = state();

        assert!(state.is_revealed(Section::Hero));
        assert!(!state.is_revealed(Section::Roadmap));

        state.navigate(Section::Roadmap);
        state.navigate(Section::Hero);

        assert!(state.is_revealed(Section::Roadmap));
    }

    #[test]
    fn toggle_theme_flips() {
        let mut state = state();

        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
    }
}
