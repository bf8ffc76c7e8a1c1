//! Command-line interface for intel-dashboard
//!
//! Provides `render`, `options` and `validate` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod options;
mod render;
mod utils;
mod validate;

/// Filter, sort and render News and Tips items from JSON data files
#[derive(Parser)]
#[command(name = "intel-dashboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the filtered, newest-first item list
    Render(Box<render::RenderArgs>),

    /// List the filter options and item counts
    Options(options::OptionsArgs),

    /// Check that both data files load
    Validate(validate::ValidateArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Render(args) => render::run(*args),
        Commands::Options(args) => options::run(args),
        Commands::Validate(args) => validate::run(args),
    }
}
