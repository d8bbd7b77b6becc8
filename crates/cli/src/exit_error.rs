// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! `app::run` returns `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

/// Exit code for every fatal error pvx reports itself.
pub const FAILURE_EXIT: i32 = 1;
/// Exit code after Ctrl-C; the run ends cleanly with whatever was written.
pub const INTERRUPTED_EXIT: i32 = 0;

#[derive(Debug, PartialEq, Eq)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn failure(err: impl fmt::Display) -> Self {
        Self::new(FAILURE_EXIT, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<anyhow::Error> for ExitError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ExitError>() {
            Ok(exit) => exit,
            Err(other) => Self::failure(format!("{other:#}")),
        }
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
