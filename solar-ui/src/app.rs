//! Front-end workflows: one-shot estimates, CSV batches, and the
//! line-oriented interactive session.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use solar_core::{RevenueEstimate, RevenueEstimator, RevenueInputs, Section, ThemeMode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::csv_loader;
use crate::logging;
use crate::state::AppState;
use crate::utils::{ParseDecimalError, parse_decimal};
use crate::views::{ViewContext, render_calculator, render_scenario_table};

// ─── one-shot estimate ──────────────────────────────────────────────────────

/// Optional per-run replacements for the configured default inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOverrides {
    pub daily_surplus_kwh: Option<Decimal>,
    pub price_per_kwh: Option<Decimal>,
    pub sharing_percentage: Option<Decimal>,
}

impl InputOverrides {
    pub fn apply(
        &self,
        base: RevenueInputs,
    ) -> RevenueInputs {
        RevenueInputs {
            daily_surplus_kwh: self.daily_surplus_kwh.unwrap_or(base.daily_surplus_kwh),
            price_per_kwh: self.price_per_kwh.unwrap_or(base.price_per_kwh),
            sharing_percentage: self.sharing_percentage.unwrap_or(base.sharing_percentage),
        }
    }
}

pub fn estimate_once(
    config: &AppConfig,
    overrides: &InputOverrides,
) -> Result<RevenueEstimate> {
    let inputs = overrides.apply(config.defaults);
    RevenueEstimator::new(config.estimator_config())
        .calculate(&inputs)
        .context("failed to compute revenue estimate")
}

/// Computes and renders a single estimate.
pub fn run_estimate(
    config: &AppConfig,
    overrides: &InputOverrides,
) -> Result<String> {
    let estimate = estimate_once(config, overrides)?;
    let ctx = ViewContext {
        currency_unit: &config.currency_unit,
        theme: config.theme,
    };
    Ok(render_calculator(&estimate, &ctx))
}

// ─── batch ──────────────────────────────────────────────────────────────────

/// Loads scenarios from a CSV file and renders a results table.
pub fn run_batch(
    config: &AppConfig,
    path: &Path,
) -> Result<String> {
    let scenarios = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
    info!(count = scenarios.len(), file = %path.display(), "scenarios loaded");

    let estimator = RevenueEstimator::new(config.estimator_config());
    let rows: Vec<_> = scenarios
        .into_iter()
        .map(|scenario| {
            let result = estimator.calculate(&scenario.inputs);
            if let Err(err) = &result {
                warn!(scenario = %scenario.label, %err, "scenario estimate failed");
            }
            (scenario, result)
        })
        .collect();

    let ctx = ViewContext {
        currency_unit: &config.currency_unit,
        theme: config.theme,
    };
    Ok(render_scenario_table(&rows, &ctx))
}

// ─── interactive session ────────────────────────────────────────────────────

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Open,
    Close,
    Surplus(Decimal),
    Price(Decimal),
    Share(Decimal),
    Show,
    Proceed,
    Theme(Option<ThemeMode>),
    Goto(Section),
    /// Bare level or full filter directive.
    LogLevel(String),
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidNumber(#[from] ParseDecimalError),

    #[error("unknown theme '{0}' (light or dark)")]
    InvalidTheme(String),

    #[error("unknown section '{0}'")]
    InvalidSection(String),

    #[error("the calculator is not open (type 'open')")]
    CalculatorClosed,
}

pub const SESSION_HELP: &str = "\
commands:
  open              open the revenue calculator
  close             close it without proceeding
  surplus <kWh>     set the daily surplus
  price <amount>    set the price per kWh
  share <percent>   set the shared percentage
  show              print the current estimate
  proceed           close and go to the contact form
  theme [light|dark] toggle or set the theme
  goto <section>    scroll to a page section
  log <level>       change the log level (or a filter directive)
  help              show this text
  quit              leave the session";

fn number_arg(
    name: &'static str,
    arg: &str,
) -> Result<Decimal, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }
    Ok(parse_decimal(arg)?)
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let rest: Vec<&str> = parts.collect();
        let arg = rest.join(" ");

        match word.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            "surplus" => number_arg("surplus", &arg).map(Self::Surplus),
            "price" => number_arg("price", &arg).map(Self::Price),
            "share" => number_arg("share", &arg).map(Self::Share),
            "show" => Ok(Self::Show),
            "proceed" => Ok(Self::Proceed),
            "theme" if arg.is_empty() => Ok(Self::Theme(None)),
            "theme" => ThemeMode::parse(&arg)
                .map(|t| Self::Theme(Some(t)))
                .ok_or(CommandError::InvalidTheme(arg)),
            "goto" if arg.is_empty() => Err(CommandError::MissingArgument("goto")),
            "goto" => Section::parse(&arg)
                .map(Self::Goto)
                .ok_or(CommandError::InvalidSection(arg)),
            "log" if arg.is_empty() => Err(CommandError::MissingArgument("log")),
            "log" => Ok(Self::LogLevel(arg)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Outcome of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutput {
    Text(String),
    Quit,
}

fn render_open_calculator(state: &AppState) -> Result<String> {
    let calculator = state.calculator().ok_or(CommandError::CalculatorClosed)?;
    let estimate = calculator
        .estimate()
        .context("failed to compute revenue estimate")?;
    let ctx = ViewContext {
        currency_unit: &state.currency_unit,
        theme: state.theme,
    };
    Ok(render_calculator(&estimate, &ctx))
}

/// Applies `command` to `state`. Every input edit re-renders the estimate.
pub fn apply_command(
    state: &mut AppState,
    command: SessionCommand,
) -> Result<SessionOutput> {
    debug!(?command, "session command");
    let text = match command {
        SessionCommand::Open => {
            state.open_calculator();
            render_open_calculator(state)?
        }
        SessionCommand::Close => {
            state.close_calculator();
            "calculator closed".to_string()
        }
        SessionCommand::Surplus(value) => {
            state
                .calculator_mut()
                .ok_or(CommandError::CalculatorClosed)?
                .set_daily_surplus(value);
            render_open_calculator(state)?
        }
        SessionCommand::Price(value) => {
            state
                .calculator_mut()
                .ok_or(CommandError::CalculatorClosed)?
                .set_price_per_kwh(value);
            render_open_calculator(state)?
        }
        SessionCommand::Share(value) => {
            state
                .calculator_mut()
                .ok_or(CommandError::CalculatorClosed)?
                .set_sharing_percentage(value);
            render_open_calculator(state)?
        }
        SessionCommand::Show => render_open_calculator(state)?,
        SessionCommand::Proceed => {
            let request = state.proceed().ok_or(CommandError::CalculatorClosed)?;
            // A terminal has no scroll animation to wait for.
            let section = state.complete_navigation().unwrap_or(request.navigate_to);
            format!("calculator closed, scrolled to {}", section.anchor())
        }
        SessionCommand::Theme(None) => {
            let theme = state.toggle_theme();
            format!("theme: {}", theme.as_str())
        }
        SessionCommand::Theme(Some(theme)) => {
            state.set_theme(theme);
            format!("theme: {}", theme.as_str())
        }
        SessionCommand::Goto(section) => {
            state.navigate(section);
            format!("scrolled to {}", section.anchor())
        }
        SessionCommand::LogLevel(level) => {
            logging::set_log_level(&level)?;
            info!(level = %level, "log level changed");
            format!("log level: {level}")
        }
        SessionCommand::Help => SESSION_HELP.to_string(),
        SessionCommand::Quit => return Ok(SessionOutput::Quit),
    };
    Ok(SessionOutput::Text(text))
}

/// Reads commands line by line until `quit` or end of input.
///
/// Bad commands are reported on `output` and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    mut output: W,
) -> Result<AppState> {
    let mut state = AppState::new(config);
    writeln!(output, "SoliBox revenue estimator. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome =
            SessionCommand::parse(&line).map_err(anyhow::Error::from).and_then(|command| {
                apply_command(&mut state, command)
            });

        match outcome {
            Ok(SessionOutput::Text(text)) => writeln!(output, "{text}")?,
            Ok(SessionOutput::Quit) => break,
            Err(err) => {
                warn!(input = %line, error = %err, "session command rejected");
                writeln!(output, "error: {err:#}")?;
            }
        }
    }

    output.flush()?;
    Ok(state)
}
