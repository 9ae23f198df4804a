//! xxh64sum
//!
//! XXH64 checksum command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, BackendArg, HashOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "xxh64sum")]
#[command(about = "Print or check XXH64 checksums", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (`-` or none reads stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash seed (decimal or 0x-prefixed hex)
    #[arg(short, long, default_value = "0", value_parser = parse_seed, global = true)]
    seed: u64,

    /// Block kernel to use
    #[arg(short, long, value_enum, default_value_t = BackendArg::Auto, global = true)]
    backend: BackendArg,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

fn parse_seed(value: &str) -> Result<u64, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid seed `{value}`: {e}"))
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = HashOptions {
        seed: cli.seed,
        backend: cli.backend.resolve(),
    };
    tracing::debug!(seed = options.seed, backend = %options.backend, "hash options");

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, options)?,
        None => {
            let files = if cli.files.is_empty() {
                vec![PathBuf::from("-")]
            } else {
                cli.files
            };
            hash_files(&files, options)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("xxh64=debug,xxh64sum=debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
