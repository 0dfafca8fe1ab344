// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for a golden run and the process exit codes it maps to.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    /// Run completed
    pub const SUCCESS: i32 = 0;
    /// Fatal error: the run was aborted before the summary
    pub const ERROR: i32 = 1;
    /// Run completed with failing cases and `--fail-on-mismatch` was set
    pub const TESTS_FAILED: i32 = 2;
}

/// Errors that abort a golden run.
///
/// Output mismatches are not errors; they are recorded per case and the
/// run continues.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to load config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read suite entry '{}': {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target failed on '{}' ({status}){}", .input.display(), stderr_suffix(.stderr))]
    TargetFailed {
        input: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to read expected output '{}': {source}", .path.display())]
    MissingExpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write golden file '{}': {source}", .path.display())]
    Bless {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
