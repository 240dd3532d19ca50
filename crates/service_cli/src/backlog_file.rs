//! Backlog file loading.
//!
//! A backlog file is TOML with one `[[initiative]]` table per initiative:
//!
//! ```toml
//! [[initiative]]
//! type = "classic"
//! fixed_cost = "low"
//! variable_cost = "peak1"
//! revenue_speed = "fast"
//! impact = "medium"
//! ```

use std::path::Path;

use initiative_core::types::InitiativeParams;
use initiative_portfolio::synthetic::MAX_SYNTHETIC_INITIATIVES;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Largest backlog accepted from a file.
pub const MAX_BACKLOG_SIZE: usize = MAX_SYNTHETIC_INITIATIVES;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BacklogFile {
    #[serde(rename = "initiative", default)]
    initiatives: Vec<InitiativeParams>,
}

/// Reads the initiatives of a backlog file, in file order.
pub fn load(path: &Path) -> Result<Vec<InitiativeParams>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let params = parse(&content)?;
    debug!(path = %path.display(), initiatives = params.len(), "loaded backlog file");
    Ok(params)
}

/// Parses backlog TOML text.
pub fn parse(content: &str) -> Result<Vec<InitiativeParams>> {
    let file: BacklogFile =
        toml::from_str(content).map_err(|e| CliError::backlog(e.to_string()))?;

    match file.initiatives.len() {
        0 => Err(CliError::backlog("backlog contains no [[initiative]] entries")),
        n if n > MAX_BACKLOG_SIZE => Err(CliError::backlog(format!(
            "backlog has {} initiatives, maximum is {}",
            n, MAX_BACKLOG_SIZE
        ))),
        _ => Ok(file.initiatives),
    }
}
