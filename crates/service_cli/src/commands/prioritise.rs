//! Prioritise command: rank a backlog file and report the top initiatives.

use std::path::Path;

use tracing::info;

use super::{run_report, ReportOptions};
use crate::backlog_file;
use crate::config::SimConfig;
use crate::Result;

/// Loads the backlog at `backlog_path` and runs the ranking report on it.
pub fn run(backlog_path: &Path, config: &SimConfig, options: &ReportOptions) -> Result<()> {
    info!("Prioritising backlog from {}", backlog_path.display());

    let params = backlog_file::load(backlog_path)?;
    run_report(&params, config, options)
}
