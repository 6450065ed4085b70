//! # pducfg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Exit codes: 0 all documents valid, 1 at least one diagnostic, 2 fatal
//! setup error (an unusable schema aborts before any document is read).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pducfg_cli::config::{run_config, ConfigArgs};
use pducfg_cli::pdudef::{run_pdudef, PdudefArgs};

/// Simulation endpoint configuration validator.
///
/// Checks endpoint/comm documents against their JSON Schemas and verifies
/// that cross-file references (caches, comm bindings, PDU definitions and
/// their type sets) resolve on disk.
#[derive(Parser, Debug)]
#[command(name = "pducfg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate endpoint/comm documents against a JSON Schema.
    Config(ConfigArgs),

    /// Validate PDU-definition documents and their referenced type sets.
    Pdudef(PdudefArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Config(args) => run_config(&args),
        Commands::Pdudef(args) => run_pdudef(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Setup failed; nothing was validated.
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}
