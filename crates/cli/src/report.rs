// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reporting in text and JSON formats.
//!
//! Text mode streams one line per case as the run progresses and ends
//! with the `<passed>/<total> passed` summary. JSON mode stays silent
//! until the run completes, then writes a single document.

use crate::cli::OutputFormat;
use crate::runner::{CaseOutcome, CaseResult, RunObserver, RunSummary};
use crate::suite::TestCase;
use serde::Serialize;
use similar::TextDiff;
use std::io::Write;

/// JSON document written at the end of a run
#[derive(Clone, Debug, Serialize)]
pub struct JsonReport {
    pub passed: usize,
    pub total: usize,
    pub cases: Vec<JsonCase>,
}

/// Per-case entry of [`JsonReport`]
#[derive(Clone, Debug, Serialize)]
pub struct JsonCase {
    pub name: String,
    pub status: &'static str,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub detail: Option<JsonDetail>,
}

/// Extra fields for cases that did not simply pass
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum JsonDetail {
    Mismatch {
        expected: String,
        actual: String,
    },
    Crash {
        exit_code: Option<i32>,
        stderr: String,
    },
    Bless {
        created: bool,
    },
}

impl JsonReport {
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            passed: summary.tally.n_passed,
            total: summary.tally.n_tests,
            cases: summary.results.iter().map(JsonCase::from_result).collect(),
        }
    }
}

impl JsonCase {
    fn from_result(result: &CaseResult) -> Self {
        let detail = match &result.outcome {
            CaseOutcome::Passed => None,
            CaseOutcome::Failed { expected, actual } => Some(JsonDetail::Mismatch {
                expected: String::from_utf8_lossy(expected).into_owned(),
                actual: String::from_utf8_lossy(actual).into_owned(),
            }),
            CaseOutcome::Crashed { status, stderr } => Some(JsonDetail::Crash {
                exit_code: status.code(),
                stderr: String::from_utf8_lossy(stderr).into_owned(),
            }),
            CaseOutcome::Blessed { created } => Some(JsonDetail::Bless { created: *created }),
        };
        Self {
            name: result.case.name.clone(),
            status: result.outcome.label(),
            duration_ms: result.duration.as_millis() as u64,
            detail,
        }
    }
}

/// Writes run progress and the final summary
pub struct Reporter<W: Write> {
    writer: W,
    format: OutputFormat,
    show_diff: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, format: OutputFormat, show_diff: bool) -> Self {
        Self {
            writer,
            format,
            show_diff,
        }
    }

    /// Write the end-of-run summary
    pub fn finish(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{}/{} passed",
                summary.tally.n_passed, summary.tally.n_tests
            )?,
            OutputFormat::Json => {
                let report = JsonReport::from_summary(summary);
                serde_json::to_writer(&mut self.writer, &report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_mismatch(
        &mut self,
        expected: &[u8],
        actual: &[u8],
        stderr: &[u8],
    ) -> std::io::Result<()> {
        let expected = String::from_utf8_lossy(expected);
        let actual = String::from_utf8_lossy(actual);

        writeln!(self.writer, "FAILED")?;
        writeln!(self.writer, "Expected:")?;
        writeln!(self.writer, "{}", expected)?;
        writeln!(self.writer, "Got:")?;
        writeln!(self.writer, "{}", actual)?;
        if !stderr.is_empty() {
            writeln!(self.writer, "Stderr:")?;
            writeln!(self.writer, "{}", String::from_utf8_lossy(stderr))?;
        }

        if self.show_diff {
            let diff = TextDiff::from_lines(&*expected, &*actual);
            writeln!(self.writer, "Diff:")?;
            write!(
                self.writer,
                "{}",
                diff.unified_diff().header("expected", "actual")
            )?;
        }
        Ok(())
    }

    fn write_crash(&mut self, code: Option<i32>, stderr: &[u8]) -> std::io::Result<()> {
        writeln!(self.writer, "CRASHED")?;
        match code {
            Some(code) => writeln!(self.writer, "Exit code: {}", code)?,
            None => writeln!(self.writer, "Terminated by signal")?,
        }
        writeln!(self.writer, "Stderr:")?;
        writeln!(self.writer, "{}", String::from_utf8_lossy(stderr))
    }
}

impl<W: Write> RunObserver for Reporter<W> {
    fn case_started(&mut self, case: &TestCase) -> std::io::Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }
        // Same line as the outcome; flush so a hanging target shows which case it is on
        write!(self.writer, "Runnning test {}...", case.file_name())?;
        self.writer.flush()
    }

    fn case_finished(&mut self, result: &CaseResult) -> std::io::Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }
        match &result.outcome {
            CaseOutcome::Passed => writeln!(self.writer, "passed")?,
            CaseOutcome::Failed { expected, actual } => {
                self.write_mismatch(expected, actual, &result.stderr)?
            }
            CaseOutcome::Crashed { status, stderr } => self.write_crash(status.code(), stderr)?,
            CaseOutcome::Blessed { created: true } => writeln!(self.writer, "created")?,
            CaseOutcome::Blessed { created: false } => writeln!(self.writer, "blessed")?,
        }
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
