use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use solar_core::{InputPolicy, ThemeMode};
use solar_ui::app::{self, InputOverrides};
use solar_ui::{AppConfig, logging, utils};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Revenue estimator for SoliBox solar surplus sharing.
///
/// Projects monthly and annual earnings from a daily surplus, a price per
/// kWh and the share of the surplus that is sold.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML config file. Defaults to `solibox.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive; overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Theme to render with; overrides the config file.
    #[arg(long, global = true, value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Input policy (pass-through or clamp); overrides the config file.
    #[arg(long, global = true, value_parser = parse_policy)]
    policy: Option<InputPolicy>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a single estimate.
    Estimate {
        /// Average daily surplus in kWh.
        #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
        daily_surplus: Option<Decimal>,

        /// Price per kWh.
        #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
        price: Option<Decimal>,

        /// Percentage of the surplus that is shared (0-100).
        #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
        share: Option<Decimal>,
    },

    /// Estimate every scenario in a CSV file.
    Batch {
        /// CSV with daily_surplus_kwh, price_per_kwh, sharing_percentage
        /// and an optional label column.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Interactive calculator session reading commands from stdin.
    Session,
}

fn parse_number(s: &str) -> Result<Decimal, String> {
    utils::parse_decimal(s).map_err(|e| e.to_string())
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(s).ok_or_else(|| format!("unknown theme '{s}' (light or dark)"))
}

fn parse_policy(s: &str) -> Result<InputPolicy, String> {
    InputPolicy::parse(s).ok_or_else(|| format!("unknown policy '{s}' (pass-through or clamp)"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(policy) = cli.policy {
        config.input_policy = policy;
    }

    logging::init_logging(&config.logging).context("failed to initialise logging")?;
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Session) {
        Command::Estimate {
            daily_surplus,
            price,
            share,
        } => {
            let overrides = InputOverrides {
                daily_surplus_kwh: daily_surplus,
                price_per_kwh: price,
                sharing_percentage: share,
            };
            println!("{}", app::run_estimate(&config, &overrides)?);
        }
        Command::Batch { file } => {
            println!("{}", app::run_batch(&config, &file)?);
        }
        Command::Session => {
            let stdin = io::stdin();
            app::run_session(&config, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
