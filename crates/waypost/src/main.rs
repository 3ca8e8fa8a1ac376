//! waypost CLI - sidebar-driven static documentation site generator.
//!
//! Provides commands for:
//! - `build`: Render the content tree into a static site
//! - `check`: Validate content and navigation without writing output
//! - `nav`: Print the resolved navigation tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, NavArgs};
use output::Output;

/// waypost - documentation site generator.
#[derive(Parser)]
#[command(name = "waypost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
    /// Validate content and navigation without writing output.
    Check(CheckArgs),
    /// Print the resolved navigation tree as JSON.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Nav(_) => false,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
