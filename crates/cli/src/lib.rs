// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test runner.
//!
//! Runs an executable once per input script in `<suite>/src/*.lsp`,
//! captures its stdout, and compares it byte for byte with the golden
//! file `<suite>/out/<name>.out`. Mismatches are reported and counted;
//! a missing golden or a crashing target aborts the run.
//!
//! ```text
//! golden-runner ./tmp/lisp test/
//! Runnning test add.lsp...passed
//! 1/1 passed
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output_diagnostic;
pub mod report;
pub mod runner;
pub mod suite;
pub mod target;

pub use error::RunError;
pub use runner::{CaseOutcome, CaseResult, RunSummary, Runner, Tally};
pub use suite::{Suite, SuiteLayout, TestCase};
