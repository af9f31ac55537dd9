//! rover - run a grid-agent request and print the final positions.
//!
//! ```text
//! rover "5 5
//! 1 2 N
//! LFLFLFLFF"
//! echo "$REQUEST" | rover --policy sequential --move-symbol M
//! ```

mod app;
mod config;

#[cfg(test)]
mod tests;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rr_core::{MoveSymbol, Policy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rover")]
#[command(author, version, about = "Simulate agents moving on a bounded grid", long_about = None)]
struct Cli {
    /// Request text (read from stdin when omitted)
    request: Option<String>,

    /// Scheduling policy: round-robin or sequential
    #[arg(short, long)]
    policy: Option<Policy>,

    /// Letter that means "move forward": F or M
    #[arg(short, long)]
    move_symbol: Option<MoveSymbol>,

    /// TOML file with run settings (flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for per-round CSV trace files
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    let config = config::with_overrides(config, cli.policy, cli.move_symbol);

    let text = match cli.request {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    app::handle(&text, &config, cli.trace.as_deref())
}

/// Logs go to stderr so stdout carries only the response.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
