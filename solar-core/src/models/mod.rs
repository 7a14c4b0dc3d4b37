mod input_policy;
mod revenue;
mod section;
mod theme;

pub use input_policy::InputPolicy;
pub use revenue::{RevenueEstimate, RevenueInputs};
pub use section::Section;
pub use theme::ThemeMode;
