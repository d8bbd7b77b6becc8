// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use pvx_core::{DEFAULT_HEADING, DEFAULT_PREFIX};

/// Default tracing filter when `PVX_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Group heading template: `PVX_HEADING_FORMAT`, else the built-in default.
/// A set-but-empty value disables headings.
pub fn heading_format() -> String {
    std::env::var("PVX_HEADING_FORMAT").unwrap_or_else(|_| DEFAULT_HEADING.to_string())
}

/// Line prefix template: `PVX_PREFIX_FORMAT`, else the built-in default.
pub fn prefix_format() -> String {
    std::env::var("PVX_PREFIX_FORMAT").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Networks file named by `PVX_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("PVX_CONFIG").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// `<user config dir>/pvx/networks.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pvx").join("networks.toml"))
}

/// Tracing filter directives: `PVX_LOG`, else `warn`.
pub fn log_filter() -> String {
    std::env::var("PVX_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

/// Heading and prefix templates used when no flag overrides them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub heading: String,
    pub prefix: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self { heading: DEFAULT_HEADING.to_string(), prefix: DEFAULT_PREFIX.to_string() }
    }
}

/// Everything the CLI takes from its environment, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub templates: Templates,
    pub config_path: Option<PathBuf>,
    pub default_config_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            templates: Templates { heading: heading_format(), prefix: prefix_format() },
            config_path: config_path(),
            default_config_path: default_config_path(),
        }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
