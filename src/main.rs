//! SecureBank CLI
//!
//! Runs a banking session over the demo accounts, either interactively or
//! from a CSV script.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --script session.csv
//! cargo run -- --script session.csv --today 2024-03-01 --statement statement.csv
//! RUST_LOG=debug cargo run -- --script session.csv
//! ```
//!
//! Results go to stdout; log events go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (script not found, output not writable, etc.)

use securebank::cli;
use securebank::config::BankConfig;
use securebank::driver;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let settings = args.to_run_settings();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = driver::run(&settings, &BankConfig::default(), &mut output) {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
