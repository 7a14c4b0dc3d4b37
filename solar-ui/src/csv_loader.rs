//! CSV loader for batch revenue scenarios.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column               | Required | Type    | Notes                         |
//! |----------------------|----------|---------|-------------------------------|
//! | `label`              | no       | string  | Shown in the results table    |
//! | `daily_surplus_kwh`  | yes      | decimal | e.g. `8` or `7.5`             |
//! | `price_per_kwh`      | yes      | decimal | e.g. `200`                    |
//! | `sharing_percentage` | yes      | decimal | 0–100, e.g. `40`              |
//!
//! ### Example
//!
//! ```csv
//! label,daily_surplus_kwh,price_per_kwh,sharing_percentage
//! Default,8,200,40
//! Full share,10,150,100
//! ```
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use solar_core::RevenueInputs;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    daily_surplus_kwh: Decimal,
    price_per_kwh: Decimal,
    sharing_percentage: Decimal,
}

/// One named set of calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub inputs: RevenueInputs,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading scenario data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, non-numeric value, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Rows without a label are named after their 1-based row number.
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Scenario {
    let label = row
        .label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| format!("row {row_number}"));

    Scenario {
        label,
        inputs: RevenueInputs::new(
            row.daily_surplus_kwh,
            row.price_per_kwh,
            row.sharing_percentage,
        ),
    }
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   numeric field cannot be deserialised.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            Ok(convert_row(row, idx + 1))
        })
        .collect()
}

/// Read the file at `path` and parse it with [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, CsvLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&text)
}
