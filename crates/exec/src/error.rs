// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from loading networks and dispatching commands.

use std::path::PathBuf;

/// Failures that prevent a result set from being produced at all.
///
/// A machine whose process cannot be started is not an error here; it is
/// reported in that machine's record instead.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Network configuration file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: std::io::Error },

    /// Network configuration file is not valid TOML for our schema.
    #[error("invalid config {}: {source}", path.display())]
    ParseConfig { path: PathBuf, source: toml::de::Error },

    /// The named network could not be resolved into a set of machines.
    #[error("failed to boot network ({network}): {reason}")]
    Boot { network: String, reason: String },

    /// No command was given.
    #[error("missing command")]
    MissingCommand,

    /// A per-machine task panicked or was cancelled.
    #[error("machine task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
