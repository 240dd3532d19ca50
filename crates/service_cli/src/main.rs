//! initiative-sim - Command Line Front End for the Initiative Simulator
//!
//! Generates monthly financial curves for initiatives and ranks a backlog by
//! its cumulative net benefit at a horizon month.
//!
//! # Commands
//!
//! - `initiative-sim curve --type classic --fixed-cost low ...` - Print one initiative's curve
//! - `initiative-sim prioritise --backlog <file>` - Rank a backlog file
//! - `initiative-sim demo` - Rank a synthetic backlog
//! - `initiative-sim check` - Validate configuration
//!
//! # Architecture
//!
//! This crate is the presentation layer: it loads configuration and input
//! files, drives `initiative_core` and `initiative_portfolio`, and renders
//! the results. It holds no simulation logic of its own.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use initiative_core::types::{
    FixedCostTier, ImpactTier, InitiativeParams, InitiativeType, RevenueSpeed, VariableCostProfile,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod backlog_file;
mod chart;
mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::ReportOptions;
use config::{OutputFormat, SimConfig};

/// Initiative portfolio simulator CLI
#[derive(Parser)]
#[command(name = "initiative-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "initiative-sim.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by the ranking commands
#[derive(clap::Args)]
struct ReportArgs {
    /// Month index used to rank initiatives
    #[arg(long)]
    horizon_month: Option<usize>,

    /// Number of initiatives to select (default: min(backlog size, select_count))
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output format (table, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the aggregate chart from table output
    #[arg(long)]
    no_chart: bool,
}

impl ReportArgs {
    fn into_options(self, config: &SimConfig) -> ReportOptions {
        let defaults = ReportOptions::from_config(config);
        ReportOptions {
            horizon_month: self.horizon_month.unwrap_or(defaults.horizon_month),
            count: self.count,
            format: self.format.unwrap_or(defaults.format),
            output: self.output,
            chart: !self.no_chart,
            ..defaults
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the monthly curve of one initiative
    Curve {
        /// Initiative type (classic, disruptive)
        #[arg(short = 't', long = "type")]
        initiative_type: InitiativeType,

        /// Fixed cost tier (low, medium, high)
        #[arg(long)]
        fixed_cost: FixedCostTier,

        /// Variable cost profile (peak1, peak2)
        #[arg(long)]
        variable_cost: VariableCostProfile,

        /// Revenue speed (fast, medium, slow)
        #[arg(long)]
        revenue_speed: RevenueSpeed,

        /// Impact tier (low, medium, high)
        #[arg(long)]
        impact: ImpactTier,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write the curve to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank a backlog file and report the top initiatives
    Prioritise {
        /// Path to backlog file (TOML, one [[initiative]] per entry)
        #[arg(short, long)]
        backlog: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Rank a synthetic random backlog
    Demo {
        /// Number of initiatives to generate
        #[arg(short, long)]
        initiatives: Option<usize>,

        /// Random seed for a reproducible backlog
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Validate and print the effective configuration
    Check,
}

impl Commands {
    /// Whether the command refuses to run on an invalid configuration.
    ///
    /// `check` reports the problems itself.
    fn requires_valid_config(&self) -> bool {
        !matches!(self, Commands::Check)
    }
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimConfig::load_or_default(&cli.config)?.with_env_override();
    init_tracing(cli.verbose, &config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, path = %cli.config.display(), "configuration loaded");

    if cli.command.requires_valid_config() {
        config.validate()?;
    }

    match cli.command {
        Commands::Curve {
            initiative_type,
            fixed_cost,
            variable_cost,
            revenue_speed,
            impact,
            format,
            output,
        } => {
            let params = InitiativeParams::new(
                initiative_type,
                fixed_cost,
                variable_cost,
                revenue_speed,
                impact,
            );
            commands::curve::run(
                &params,
                config.horizon_months,
                format.unwrap_or(config.format),
                output.as_deref(),
            )
        }
        Commands::Prioritise { backlog, report } => {
            commands::prioritise::run(&backlog, &config, &report.into_options(&config))
        }
        Commands::Demo {
            initiatives,
            seed,
            report,
        } => commands::demo::run(
            initiatives.unwrap_or(config.demo_initiatives),
            seed.or(config.seed),
            &config,
            &report.into_options(&config),
        ),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
