// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `Error:` and `Warning:` lines on stderr.
//!
//! Coloured when stderr is a terminal so they stand out from the report,
//! which goes to stdout.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Kind of diagnostic line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    fn ansi_colour(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
        }
    }
}

/// Print an error line to stderr (red on a terminal).
pub fn print_error(msg: impl Display) {
    print_diagnostic(Severity::Error, msg);
}

/// Print a warning line to stderr (yellow on a terminal).
pub fn print_warning(msg: impl Display) {
    print_diagnostic(Severity::Warning, msg);
}

fn print_diagnostic(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let colour = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, colour);
}

/// Write one diagnostic line; write failures are ignored since stderr is the last resort.
fn write_diagnostic<W: Write>(writer: &mut W, severity: Severity, msg: impl Display, colour: bool) {
    let _ = if colour {
        writeln!(
            writer,
            "{}{}: {}\x1b[0m",
            severity.ansi_colour(),
            severity.label(),
            msg
        )
    } else {
        writeln!(writer, "{}: {}", severity.label(), msg)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
