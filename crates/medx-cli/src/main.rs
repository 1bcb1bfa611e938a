//! # medx CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; each handler returns a process exit code so
//! that validation failures surface as a non-zero exit without being
//! treated as hard errors.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medx_cli::init::{run_init, InitArgs};
use medx_cli::package::{run_package, PackageArgs};
use medx_cli::validate::{run_validate, ValidateArgs};

/// medx — clinical extension manifest toolchain.
///
/// Validates extension, connector, and publisher manifests, scaffolds
/// new extension projects, and stages packages for marketplace
/// submission.
#[derive(Parser, Debug)]
#[command(name = "medx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a manifest file against its schema and business rules.
    Validate(ValidateArgs),

    /// Scaffold a new extension project with template manifests and assets.
    Init(InitArgs),

    /// Validate and stage an extension project into a distributable layout.
    Package(PackageArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Init(args) => run_init(&args),
        Commands::Package(args) => run_package(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
