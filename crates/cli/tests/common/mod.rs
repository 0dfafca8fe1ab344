// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for end-to-end runner tests.
//!
//! The target under test is `sh`, so every input script is a shell
//! snippet and its stdout plays the part of interpreter output.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Target program used by every suite
pub const TARGET: &str = "sh";

/// On-disk suite with `src/` and `out/` directories
pub struct SuiteDir {
    dir: TempDir,
}

impl SuiteDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("out")).unwrap();
        Self { dir }
    }

    /// Add a case whose input prints `stdout` and whose golden is `golden`
    pub fn case(self, name: &str, stdout: &str, golden: &str) -> Self {
        self.input(name, &print_script(stdout)).golden(name, golden)
    }

    /// Add an input script verbatim
    pub fn input(self, name: &str, script: &str) -> Self {
        fs::write(self.src().join(format!("{}.lsp", name)), script).unwrap();
        self
    }

    /// Add a golden file verbatim
    pub fn golden(self, name: &str, content: &str) -> Self {
        fs::write(self.out().join(format!("{}.out", name)), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Suite root with a trailing separator, as the original harness expects
    pub fn arg(&self) -> String {
        format!("{}/", self.path().display())
    }

    pub fn src(&self) -> PathBuf {
        self.path().join("src")
    }

    pub fn out(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn read_golden(&self, name: &str) -> String {
        fs::read_to_string(self.out().join(format!("{}.out", name))).unwrap()
    }
}

/// Shell script that writes `text` to stdout exactly
pub fn print_script(text: &str) -> String {
    format!("printf '%s' '{}'\n", text.replace('\'', r"'\''"))
}

/// Shell script that writes to stderr and exits with `code`
pub fn crash_script(code: i32) -> String {
    format!("echo 'segfault in eval' >&2\nexit {}\n", code)
}
