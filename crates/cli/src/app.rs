// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One invocation of the runner: config, discovery, run, report.

use std::io::Write;

use glob::Pattern;

use crate::cli::Cli;
use crate::config::RunnerConfig;
use crate::error::{exit_codes, RunError};
use crate::output_diagnostic::print_warning;
use crate::report::Reporter;
use crate::runner::{RunOptions, Runner};
use crate::suite::Suite;
use crate::target::Target;

/// Resolve the effective config: file (if any) with CLI flags on top
pub fn resolve_config(cli: &Cli) -> Result<RunnerConfig, RunError> {
    let config = match &cli.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    Ok(cli.apply_to(config))
}

/// Run the suite described by `cli`, writing the report to `writer`.
///
/// Returns the process exit code for a completed run. Fatal errors are
/// returned as `Err` and leave whatever was already reported in `writer`.
pub async fn execute<W: Write>(cli: &Cli, writer: W) -> Result<i32, RunError> {
    let config = resolve_config(cli)?;
    let layout = config.layout();

    let src = cli.suite_dir.join(&layout.src_dir);
    if !src.is_dir() {
        print_warning(format_args!(
            "'{}' is not a directory; no test cases to run",
            src.display()
        ));
    }

    let mut suite = Suite::discover(&cli.suite_dir, layout)?;
    if let Some(filter) = &cli.filter {
        let discovered = suite.len();
        suite = suite.filter(&Pattern::new(filter)?);
        if suite.is_empty() && discovered > 0 {
            print_warning(format_args!(
                "filter '{}' matched none of {} test cases",
                filter, discovered
            ));
        }
    }

    let runner = Runner::new(
        Target::new(&cli.binary),
        RunOptions {
            on_crash: config.on_crash,
            bless: cli.bless,
        },
    );
    let mut reporter = Reporter::new(writer, cli.format, config.diff);

    let summary = runner.run(&suite, &mut reporter).await?;
    reporter.finish(&summary)?;

    tracing::debug!(
        passed = summary.tally.n_passed,
        total = summary.tally.n_tests,
        "run complete"
    );

    if config.fail_on_mismatch && !summary.tally.all_passed() {
        Ok(exit_codes::TESTS_FAILED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

#[cfg(all(test, unix))]
#[path = "app_tests.rs"]
mod tests;
