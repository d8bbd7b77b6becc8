// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics go to stderr so they never mix with results on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::env;

/// Build the filter from `directives`, falling back to the default level
/// when they do not parse.
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER))
}

/// Install the global tracing subscriber.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(&env::log_filter()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
