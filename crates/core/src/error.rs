// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pipeline configuration and rendering.

use thiserror::Error;

/// Invalid pipeline configuration. Raised before any output is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported format ({0})")]
    UnsupportedFormat(String),

    #[error("unknown field ({0})")]
    UnknownField(String),
}

/// Failure while writing rendered output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RenderError {
    /// The consumer of our output went away (e.g. `pvx ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RenderError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
