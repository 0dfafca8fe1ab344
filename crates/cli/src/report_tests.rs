// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::runner::Tally;
use crate::suite::SuiteLayout;
use std::path::Path;
use std::time::Duration;

fn case(name: &str) -> TestCase {
    let root = Path::new("suite");
    TestCase::from_input(
        root,
        &SuiteLayout::default(),
        root.join("src").join(format!("{}.lsp", name)),
    )
    .unwrap()
}

fn result(name: &str, outcome: CaseOutcome) -> CaseResult {
    CaseResult {
        case: case(name),
        outcome,
        stderr: Vec::new(),
        duration: Duration::from_millis(12),
    }
}

fn mismatch(expected: &str, actual: &str) -> CaseOutcome {
    CaseOutcome::Failed {
        expected: expected.as_bytes().to_vec(),
        actual: actual.as_bytes().to_vec(),
    }
}

/// Drive a reporter through `results` the way the runner would
fn render(format: OutputFormat, show_diff: bool, results: Vec<CaseResult>) -> String {
    let mut reporter = Reporter::new(Vec::new(), format, show_diff);
    let mut tally = Tally::new(results.len());
    for r in &results {
        reporter.case_started(&r.case).unwrap();
        tally.record(&r.outcome);
        reporter.case_finished(r).unwrap();
    }
    reporter.finish(&RunSummary { results, tally }).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_single_pass() {
    let out = render(
        OutputFormat::Text,
        false,
        vec![result("add", CaseOutcome::Passed)],
    );
    assert_eq!(out, "Runnning test add.lsp...passed\n1/1 passed\n");
}

#[test]
fn test_failure_block_shows_expected_then_got() {
    let out = render(
        OutputFormat::Text,
        false,
        vec![
            result("add", CaseOutcome::Passed),
            result("sub", mismatch("5\n", "4\n")),
        ],
    );
    assert_eq!(
        out,
        "Runnning test add.lsp...passed\n\
         Runnning test sub.lsp...FAILED\n\
         Expected:\n\
         5\n\
         \n\
         Got:\n\
         4\n\
         \n\
         1/2 passed\n"
    );
}

#[test]
fn test_mismatch_shows_target_stderr_after_got() {
    let mut failed = result("sub", mismatch("5\n", "4\n"));
    failed.stderr = b"warning: unused binding\n".to_vec();
    let out = render(OutputFormat::Text, false, vec![failed]);
    assert_eq!(
        out,
        "Runnning test sub.lsp...FAILED\n\
         Expected:\n\
         5\n\
         \n\
         Got:\n\
         4\n\
         \n\
         Stderr:\n\
         warning: unused binding\n\
         \n\
         0/1 passed\n"
    );
}

#[test]
fn test_passing_case_hides_target_stderr() {
    let mut passed = result("add", CaseOutcome::Passed);
    passed.stderr = b"noise\n".to_vec();
    let out = render(OutputFormat::Text, false, vec![passed]);
    assert_eq!(out, "Runnning test add.lsp...passed\n1/1 passed\n");
}

#[test]
fn test_empty_run_prints_only_summary() {
    let out = render(OutputFormat::Text, false, vec![]);
    assert_eq!(out, "0/0 passed\n");
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let out = render(
        OutputFormat::Text,
        false,
        vec![result(
            "bin",
            CaseOutcome::Failed {
                expected: b"ok".to_vec(),
                actual: b"\xff".to_vec(),
            },
        )],
    );
    assert!(out.contains("Got:\n\u{fffd}\n"), "{}", out);
}

#[test]
fn test_diff_appended_when_enabled() {
    let out = render(
        OutputFormat::Text,
        true,
        vec![result("sub", mismatch("1\n5\n", "1\n4\n"))],
    );
    assert!(out.contains("Diff:\n"), "{}", out);
    assert!(out.contains("--- expected\n+++ actual\n"), "{}", out);
    assert!(out.contains("-5\n"), "{}", out);
    assert!(out.contains("+4\n"), "{}", out);
    assert!(out.ends_with("0/1 passed\n"), "{}", out);
}

#[test]
fn test_no_diff_by_default() {
    let out = render(
        OutputFormat::Text,
        false,
        vec![result("sub", mismatch("5\n", "4\n"))],
    );
    assert!(!out.contains("Diff:"));
}

#[test]
fn test_bless_markers() {
    let out = render(
        OutputFormat::Text,
        false,
        vec![
            result("a", CaseOutcome::Blessed { created: true }),
            result("b", CaseOutcome::Blessed { created: false }),
        ],
    );
    assert_eq!(
        out,
        "Runnning test a.lsp...created\nRunnning test b.lsp...blessed\n2/2 passed\n"
    );
}

#[test]
fn test_json_report_is_single_document() {
    let out = render(
        OutputFormat::Json,
        false,
        vec![
            result("add", CaseOutcome::Passed),
            result("sub", mismatch("5\n", "4\n")),
        ],
    );
    assert_eq!(out.lines().count(), 1);

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["passed"], 1);
    assert_eq!(json["total"], 2);
    assert_eq!(json["cases"][0]["name"], "add");
    assert_eq!(json["cases"][0]["status"], "passed");
    assert_eq!(json["cases"][0]["duration_ms"], 12);
    assert!(json["cases"][0].get("expected").is_none());
    assert_eq!(json["cases"][1]["status"], "failed");
    assert_eq!(json["cases"][1]["expected"], "5\n");
    assert_eq!(json["cases"][1]["actual"], "4\n");
}

#[test]
fn test_json_empty_run() {
    let out = render(OutputFormat::Json, false, vec![]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["passed"], 0);
    assert_eq!(json["total"], 0);
    assert_eq!(json["cases"].as_array().unwrap().len(), 0);
}

#[cfg(unix)]
mod crash {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn crashed(raw: i32, stderr: &str) -> CaseOutcome {
        CaseOutcome::Crashed {
            status: ExitStatus::from_raw(raw),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_crash_block_shows_exit_code_and_stderr() {
        // Raw wait status 0x0300 is a normal exit with code 3
        let out = render(
            OutputFormat::Text,
            false,
            vec![result("bad", crashed(0x0300, "boom\n"))],
        );
        assert_eq!(
            out,
            "Runnning test bad.lsp...CRASHED\nExit code: 3\nStderr:\nboom\n\n0/1 passed\n"
        );
    }

    #[test]
    fn test_crash_by_signal() {
        // Raw wait status 9 is termination by SIGKILL
        let out = render(
            OutputFormat::Text,
            false,
            vec![result("bad", crashed(9, ""))],
        );
        assert!(out.contains("Terminated by signal\n"), "{}", out);
    }

    #[test]
    fn test_json_crash_fields() {
        let out = render(
            OutputFormat::Json,
            false,
            vec![result("bad", crashed(0x0100, "oops"))],
        );
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["cases"][0]["status"], "crashed");
        assert_eq!(json["cases"][0]["exit_code"], 1);
        assert_eq!(json["cases"][0]["stderr"], "oops");
    }
}
