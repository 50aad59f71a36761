//! Ichimoku presets - main entry point
//!
//! This binary provides four subcommands:
//! - list: Show the preset catalog
//! - show: Print the resolved parameters of one preset
//! - validate: Check a preset file
//! - export: Write the builtin presets as a preset file

use anyhow::Result;
use clap::{Parser, Subcommand};
use ichimoku_presets::{PresetFamily, Timeframe};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ichimoku-presets")]
#[command(about = "Ichimoku strategy parameter presets per symbol and timeframe", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to a file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available presets
    List {
        /// Only presets for this symbol
        #[arg(short, long)]
        symbol: Option<String>,

        /// Only presets of this family (config, sets, legacy)
        #[arg(short, long)]
        family: Option<PresetFamily>,

        /// Extra preset files to include (repeatable)
        #[arg(long = "preset-file")]
        preset_files: Vec<String>,
    },

    /// Show resolved parameters for a preset
    Show {
        /// Path to run configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Preset family (overrides config file, default: config)
        #[arg(short, long)]
        family: Option<PresetFamily>,

        /// Symbol, e.g. "EURUSD" (overrides config file)
        #[arg(short, long)]
        symbol: Option<String>,

        /// Timeframe, e.g. "M30" or "PERIOD_M30" (overrides config file)
        #[arg(short, long)]
        timeframe: Option<Timeframe>,

        /// Extra preset files to include (repeatable)
        #[arg(long = "preset-file")]
        preset_files: Vec<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate a preset file
    Validate {
        /// Path to the preset file
        path: String,
    },

    /// Export builtin presets as a preset file
    Export {
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn setup_logging(verbose: bool, command_name: &str, log_dir: Option<&PathBuf>) -> Result<()> {
    // Stdout carries command output, so console logs stay quiet unless asked
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            // Log file naming pattern: {command}_{date}.log
            let log_filename = format!(
                "{}_{}.log",
                command_name,
                chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
            );
            let file_appender = tracing_appender::rolling::never(dir, &log_filename);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            info!("Log file: {}", dir.join(&log_filename).display());
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Environment overrides may live in .env
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let command_name = match &cli.command {
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
        Commands::Validate { .. } => "validate",
        Commands::Export { .. } => "export",
    };

    setup_logging(cli.verbose, command_name, cli.log_dir.as_ref())?;

    match cli.command {
        Commands::List {
            symbol,
            family,
            preset_files,
        } => commands::list::run(symbol, family, preset_files),

        Commands::Show {
            config,
            family,
            symbol,
            timeframe,
            preset_files,
            format,
        } => commands::show::run(config, family, symbol, timeframe, preset_files, format),

        Commands::Validate { path } => commands::validate::run(path),

        Commands::Export { output } => commands::export::run(output),
    }
}
