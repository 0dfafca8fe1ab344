// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CrashPolicy, RunnerConfig};

/// Golden-file test runner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "golden-runner",
    version,
    about = "Run an executable over <suite>/src/*.lsp and compare its output with <suite>/out/*.out"
)]
pub struct Cli {
    /// Executable under test, invoked as `<binary> <input-file>`
    #[arg(value_name = "BINARY")]
    pub binary: PathBuf,

    /// Suite root containing `src/` and `out/`
    #[arg(value_name = "SUITE_DIR")]
    pub suite_dir: PathBuf,

    /// Runner configuration file (TOML)
    #[arg(long, env = "GOLDEN_RUNNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only run cases whose name matches this glob
    #[arg(long, value_name = "GLOB")]
    pub filter: Option<String>,

    /// Record a crashing target as a failed case instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Exit with a non-zero status when any case fails
    #[arg(long)]
    pub fail_on_mismatch: bool,

    /// Show a unified diff for each mismatch
    #[arg(long)]
    pub diff: bool,

    /// Overwrite golden files with the actual output
    #[arg(long)]
    pub bless: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line switches on top of a loaded config.
    ///
    /// Flags only ever turn behavior on; the config decides otherwise.
    pub fn apply_to(&self, mut config: RunnerConfig) -> RunnerConfig {
        if self.keep_going {
            config.on_crash = CrashPolicy::Continue;
        }
        if self.fail_on_mismatch {
            config.fail_on_mismatch = true;
        }
        if self.diff {
            config.diff = true;
        }
        config
    }
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Streamed per-case lines and a summary line
    #[default]
    Text,
    /// One JSON document after the run
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
