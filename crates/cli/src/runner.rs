// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential execution of a suite against the target.

use crate::config::CrashPolicy;
use crate::error::RunError;
use crate::suite::{Suite, TestCase};
use crate::target::Target;
use std::process::ExitStatus;
use std::time::Duration;

/// Outcome of a single test case
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Output matched the golden byte for byte
    Passed,
    /// Output differed from the golden
    Failed { expected: Vec<u8>, actual: Vec<u8> },
    /// Target exited non-zero and the crash policy let the run continue
    Crashed { status: ExitStatus, stderr: Vec<u8> },
    /// Output was written as the new golden
    Blessed { created: bool },
}

impl CaseOutcome {
    /// Exact comparison, no normalization
    pub fn compare(expected: Vec<u8>, actual: Vec<u8>) -> Self {
        if expected == actual {
            Self::Passed
        } else {
            Self::Failed { expected, actual }
        }
    }

    /// Whether the case counts toward `n_passed`
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed | Self::Blessed { .. })
    }

    /// Short status label used by the reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Crashed { .. } => "crashed",
            Self::Blessed { .. } => "blessed",
        }
    }
}

/// Result of one executed case
#[derive(Clone, Debug)]
pub struct CaseResult {
    pub case: TestCase,
    pub outcome: CaseOutcome,
    /// Whatever the target wrote to stderr
    pub stderr: Vec<u8>,
    pub duration: Duration,
}

/// Pass/total counters for one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub n_tests: usize,
    pub n_passed: usize,
}

impl Tally {
    pub fn new(n_tests: usize) -> Self {
        Self {
            n_tests,
            n_passed: 0,
        }
    }

    pub fn record(&mut self, outcome: &CaseOutcome) {
        if outcome.is_pass() {
            self.n_passed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.n_passed == self.n_tests
    }
}

/// Everything a completed run produced
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CaseResult>,
    pub tally: Tally,
}

/// Receives progress as the runner works through a suite.
///
/// `case_started` fires before the target is invoked, so a fatal error
/// leaves the announcement of the failing case in the output.
pub trait RunObserver {
    fn case_started(&mut self, case: &TestCase) -> std::io::Result<()>;
    fn case_finished(&mut self, result: &CaseResult) -> std::io::Result<()>;
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RunObserver for NullObserver {
    fn case_started(&mut self, _case: &TestCase) -> std::io::Result<()> {
        Ok(())
    }

    fn case_finished(&mut self, _result: &CaseResult) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runner behavior switches
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub on_crash: CrashPolicy,
    pub bless: bool,
}

/// Runs every case of a suite, one at a time
#[derive(Clone, Debug)]
pub struct Runner {
    target: Target,
    options: RunOptions,
}

impl Runner {
    pub fn new(target: Target, options: RunOptions) -> Self {
        Self { target, options }
    }

    /// Run the whole suite.
    ///
    /// Returns on the first fatal error; mismatches never stop the run.
    pub async fn run<O: RunObserver>(
        &self,
        suite: &Suite,
        observer: &mut O,
    ) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary {
            results: Vec::with_capacity(suite.len()),
            tally: Tally::new(suite.len()),
        };

        for case in suite.cases() {
            observer.case_started(case)?;
            let result = self.run_case(case).await?;
            summary.tally.record(&result.outcome);
            observer.case_finished(&result)?;
            summary.results.push(result);
        }

        Ok(summary)
    }

    /// Run one case: invoke the target, then compare against (or bless) its golden
    pub async fn run_case(&self, case: &TestCase) -> Result<CaseResult, RunError> {
        let output = self.target.run(&case.input).await?;

        let outcome = if !output.status.success() {
            match self.options.on_crash {
                CrashPolicy::Abort => {
                    return Err(RunError::TargetFailed {
                        input: case.input.clone(),
                        status: output.status,
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    });
                }
                CrashPolicy::Continue => CaseOutcome::Crashed {
                    status: output.status,
                    stderr: output.stderr.clone(),
                },
            }
        } else if self.options.bless {
            bless(case, &output.stdout).await?
        } else {
            let expected =
                tokio::fs::read(&case.expected)
                    .await
                    .map_err(|e| RunError::MissingExpected {
                        path: case.expected.clone(),
                        source: e,
                    })?;
            CaseOutcome::compare(expected, output.stdout)
        };

        Ok(CaseResult {
            case: case.clone(),
            outcome,
            stderr: output.stderr,
            duration: output.elapsed,
        })
    }
}

/// Write `actual` as the golden for `case`, creating its directory if needed
async fn bless(case: &TestCase, actual: &[u8]) -> Result<CaseOutcome, RunError> {
    let to_bless_error = |e: std::io::Error| RunError::Bless {
        path: case.expected.clone(),
        source: e,
    };

    let created = !tokio::fs::try_exists(&case.expected)
        .await
        .map_err(to_bless_error)?;
    if let Some(parent) = case.expected.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(to_bless_error)?;
    }
    tokio::fs::write(&case.expected, actual)
        .await
        .map_err(to_bless_error)?;

    tracing::info!(path = %case.expected.display(), created, "blessed golden file");
    Ok(CaseOutcome::Blessed { created })
}

#[cfg(all(test, unix))]
#[path = "runner_tests.rs"]
mod tests;
