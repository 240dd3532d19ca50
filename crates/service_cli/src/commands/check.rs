//! Check command: validate and print the effective configuration.

use std::path::Path;

use tracing::info;

use crate::config::SimConfig;
use crate::Result;

/// Prints the effective configuration loaded from `config_path`.
pub fn run(config: &SimConfig, config_path: &Path) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    println!("Configuration source: {}", source);
    println!("  horizon_months:   {}", config.horizon_months);
    println!("  horizon_month:    {}", config.horizon_month);
    println!("  select_count:     {}", config.select_count);
    println!("  demo_initiatives: {}", config.demo_initiatives);
    match config.seed {
        Some(seed) => println!("  seed:             {}", seed),
        None => println!("  seed:             (random)"),
    }
    println!("  log_level:        {}", config.log_level);
    println!("  format:           {}", config.format);

    config.validate()?;
    println!("Configuration OK");
    Ok(())
}
