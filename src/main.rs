//! `space-missions` command-line entry point.
//!
//! Sets up logging, then dispatches through [`space_missions::cli::run`]; any error is printed
//! to stderr and the process exits non-zero.

use space_missions::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = cli::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
