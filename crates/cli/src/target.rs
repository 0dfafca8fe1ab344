// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation of the executable under test.

use crate::error::RunError;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Captured result of one target invocation
#[derive(Clone, Debug)]
pub struct TargetOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub elapsed: Duration,
}

/// The program under test, invoked as `<program> <input>`
#[derive(Clone, Debug)]
pub struct Target {
    program: PathBuf,
}

impl Target {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the target on one input file and wait for it to exit.
    ///
    /// Stdout and stderr are captured as raw bytes. A non-zero exit is not
    /// an error here; the caller applies the crash policy. There is no
    /// timeout: a target that never exits blocks the run.
    pub async fn run(&self, input: &Path) -> Result<TargetOutput, RunError> {
        let start = Instant::now();
        let output = Command::new(&self.program)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| RunError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        let elapsed = start.elapsed();

        tracing::debug!(
            program = %self.program.display(),
            input = %input.display(),
            status = %output.status,
            elapsed_ms = elapsed.as_millis() as u64,
            "target exited"
        );

        Ok(TargetOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
            elapsed,
        })
    }
}

#[cfg(all(test, unix))]
#[path = "target_tests.rs"]
mod tests;
