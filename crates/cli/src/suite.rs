// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite layout and test-case discovery.
//!
//! A suite root holds input scripts under one subdirectory and golden
//! files under another, paired by base name:
//!
//! ```text
//! <root>/src/add.lsp  ->  <root>/out/add.out
//! ```

use crate::config::{
    DEFAULT_EXPECTED_EXTENSION, DEFAULT_INPUT_EXTENSION, DEFAULT_OUT_DIR, DEFAULT_SRC_DIR,
};
use crate::error::RunError;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Where inputs and goldens live inside a suite root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteLayout {
    pub src_dir: String,
    pub out_dir: String,
    pub input_extension: String,
    pub expected_extension: String,
}

impl Default for SuiteLayout {
    fn default() -> Self {
        Self {
            src_dir: DEFAULT_SRC_DIR.to_string(),
            out_dir: DEFAULT_OUT_DIR.to_string(),
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            expected_extension: DEFAULT_EXPECTED_EXTENSION.to_string(),
        }
    }
}

impl SuiteLayout {
    /// Glob pattern matching every input script directly under `<root>/<src_dir>`.
    ///
    /// The root is escaped so metacharacters in directory names match literally.
    pub fn input_pattern(&self, root: &Path) -> String {
        let src = root.join(&self.src_dir);
        format!(
            "{}/*.{}",
            Pattern::escape(&src.to_string_lossy()),
            Pattern::escape(&self.input_extension)
        )
    }

    /// Golden path for a test named `name`
    pub fn expected_path(&self, root: &Path, name: &str) -> PathBuf {
        root.join(&self.out_dir)
            .join(format!("{}.{}", name, self.expected_extension))
    }
}

/// One (input, golden) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Base name shared by input and golden
    pub name: String,
    /// Input script handed to the target
    pub input: PathBuf,
    /// Golden file the output is compared against
    pub expected: PathBuf,
}

impl TestCase {
    /// Build a case from an input path, deriving its name and golden path.
    ///
    /// Returns `None` when the path has no file stem.
    pub fn from_input(root: &Path, layout: &SuiteLayout, input: PathBuf) -> Option<Self> {
        let name = input.file_stem()?.to_string_lossy().into_owned();
        let expected = layout.expected_path(root, &name);
        Some(Self {
            name,
            input,
            expected,
        })
    }

    /// Input file name as announced in the report (`add.lsp`)
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Test cases found under a suite root
#[derive(Clone, Debug)]
pub struct Suite {
    cases: Vec<TestCase>,
}

impl Suite {
    /// Discover every input script under `root`.
    ///
    /// Matches are non-recursive and come back in sorted path order.
    /// Hidden files (leading `.`) are not cases. A missing input
    /// directory yields an empty suite. Golden files are
    /// not checked here; a missing golden surfaces when its case runs.
    pub fn discover(root: &Path, layout: SuiteLayout) -> Result<Self, RunError> {
        let pattern = layout.input_pattern(root);
        tracing::debug!(%pattern, "discovering test cases");

        let mut cases = Vec::new();
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        for entry in glob::glob_with(&pattern, options)? {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                RunError::Discovery {
                    path,
                    source: e.into(),
                }
            })?;
            if !path.is_file() {
                continue;
            }
            if let Some(case) = TestCase::from_input(root, &layout, path) {
                cases.push(case);
            }
        }

        tracing::debug!(count = cases.len(), "discovered test cases");
        Ok(Self { cases })
    }

    /// Keep only cases whose base name matches `filter`
    pub fn filter(mut self, filter: &Pattern) -> Self {
        self.cases.retain(|case| filter.matches(&case.name));
        self
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
