//! Curve command: monthly series of a single initiative.

use std::path::Path;

use initiative_core::curves::generate;
use initiative_core::types::InitiativeParams;
use tracing::info;

use super::emit;
use crate::config::OutputFormat;
use crate::report::{curve_csv, curve_rows, render_curve_table};
use crate::Result;

/// Generates and prints the curve of `params`.
pub fn run(
    params: &InitiativeParams,
    horizon_months: usize,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    info!("Generating curve for {} over {} months", params, horizon_months);

    let curve = generate(params, horizon_months)?;
    let rows = curve_rows(&curve);

    let bytes = match format {
        OutputFormat::Table => {
            let mut text = format!("Initiative {}\n", params);
            text.push_str(&render_curve_table(&rows));
            text.into_bytes()
        }
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?.into_bytes(),
        OutputFormat::Csv => curve_csv(&rows)?,
    };
    emit(&bytes, output)
}
