pub mod app;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod state;
pub mod utils;
pub mod views;

pub use config::AppConfig;
pub use state::AppState;
