//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The ranking report
//! shared by `prioritise` and `demo` lives here.

pub mod check;
pub mod curve;
pub mod demo;
pub mod prioritise;

use std::path::{Path, PathBuf};

use initiative_core::curves::CurveCache;
use initiative_core::types::InitiativeParams;
use initiative_portfolio::Backlog;
use tracing::info;

use crate::config::{OutputFormat, SimConfig};
use crate::report::PortfolioReport;
use crate::Result;

/// Report settings after merging command line flags over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub horizon_months: usize,
    pub horizon_month: usize,
    /// Explicit selection count; `None` selects `min(backlog, select_count)`
    pub count: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub chart: bool,
}

impl ReportOptions {
    /// Configuration values with no command line overrides.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            horizon_months: config.horizon_months,
            horizon_month: config.horizon_month,
            count: None,
            format: config.format,
            output: None,
            chart: true,
        }
    }
}

/// Generates, ranks and renders a backlog.
pub(crate) fn build_report(
    params: &[InitiativeParams],
    config: &SimConfig,
    options: &ReportOptions,
) -> Result<PortfolioReport> {
    let cache = CurveCache::new();
    let backlog = Backlog::from_params_cached(params, options.horizon_months, &cache)?;
    let count = options
        .count
        .unwrap_or_else(|| config.effective_select_count(backlog.len()));

    info!(
        initiatives = backlog.len(),
        distinct_curves = cache.len(),
        horizon_month = options.horizon_month,
        count,
        "ranking backlog"
    );

    let selection = backlog.rank_and_select(options.horizon_month, count)?;
    Ok(PortfolioReport::build(&backlog, &selection))
}

/// Builds the report for `params` and writes it in the requested format.
pub(crate) fn run_report(
    params: &[InitiativeParams],
    config: &SimConfig,
    options: &ReportOptions,
) -> Result<()> {
    let report = build_report(params, config, options)?;

    let bytes = match options.format {
        OutputFormat::Table => report.render_text(options.chart).into_bytes(),
        OutputFormat::Json => report.to_json()?.into_bytes(),
        OutputFormat::Csv => report.to_csv()?,
    };
    emit(&bytes, options.output.as_deref())?;

    info!("{}", report.summary_line());
    Ok(())
}

/// Writes `content` to `output`, or stdout when no path is given.
pub(crate) fn emit(content: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Report written to {}", path.display());
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
