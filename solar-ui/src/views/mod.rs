//! Plain-text renderings of the calculator and batch results.

pub mod calculator_view;
pub mod scenario_table;

pub use calculator_view::{ViewContext, render_calculator};
pub use scenario_table::render_scenario_table;
