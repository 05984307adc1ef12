//! uconv - interactive unit converter
//!
//! Reads phrases like "5 feet to meters" from stdin until "exit" or end of
//! input. Answers go to stdout; logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

mod config;
mod repl;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{ReplConfig, DEFAULT_LOG_FILTER};

/// `RUST_LOG` when it is set and valid, otherwise [`DEFAULT_LOG_FILTER`]
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let filter = log_filter();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    info!(version = env!("CARGO_PKG_VERSION"), "uconv started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match repl::run(stdin.lock(), stdout.lock(), &ReplConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}
