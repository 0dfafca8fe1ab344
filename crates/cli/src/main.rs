// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden runner binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use golden_runner::app;
use golden_runner::cli::Cli;
use golden_runner::error::exit_codes;
use golden_runner::output_diagnostic::print_error;

/// Structured logging on stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("golden_runner=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match app::execute(&cli, std::io::stdout()).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
