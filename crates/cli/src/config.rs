// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration loaded from an optional TOML file.

use crate::error::RunError;
use crate::suite::SuiteLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default input subdirectory
pub const DEFAULT_SRC_DIR: &str = "src";
/// Default golden subdirectory
pub const DEFAULT_OUT_DIR: &str = "out";
/// Default input script extension
pub const DEFAULT_INPUT_EXTENSION: &str = "lsp";
/// Default golden file extension
pub const DEFAULT_EXPECTED_EXTENSION: &str = "out";

/// What to do when the target exits with a non-zero status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrashPolicy {
    /// Abort the whole run with a fatal error
    #[default]
    Abort,
    /// Record the case as crashed and move on
    Continue,
}

/// Top-level runner configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Subdirectory holding input scripts
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Subdirectory holding golden files
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Extension of input scripts, without the dot
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Extension of golden files, without the dot
    #[serde(default = "default_expected_extension")]
    pub expected_extension: String,

    /// Crash handling
    #[serde(default)]
    pub on_crash: CrashPolicy,

    /// Exit non-zero when any case fails
    #[serde(default)]
    pub fail_on_mismatch: bool,

    /// Print a unified diff under each mismatch
    #[serde(default)]
    pub diff: bool,
}

fn default_src_dir() -> String {
    DEFAULT_SRC_DIR.to_string()
}

fn default_out_dir() -> String {
    DEFAULT_OUT_DIR.to_string()
}

fn default_input_extension() -> String {
    DEFAULT_INPUT_EXTENSION.to_string()
}

fn default_expected_extension() -> String {
    DEFAULT_EXPECTED_EXTENSION.to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            input_extension: default_input_extension(),
            expected_extension: default_expected_extension(),
            on_crash: CrashPolicy::Abort,
            fail_on_mismatch: false,
            diff: false,
        }
    }
}

impl RunnerConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, RunError> {
        let content = std::fs::read_to_string(path).map_err(|e| RunError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| RunError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Suite layout described by this config
    pub fn layout(&self) -> SuiteLayout {
        SuiteLayout {
            src_dir: self.src_dir.clone(),
            out_dir: self.out_dir.clone(),
            input_extension: self.input_extension.clone(),
            expected_extension: self.expected_extension.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
