// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The result-shaping pipeline: filter → split → unify → render.

use crate::filter::FieldFilter;
use crate::format::{self, LinesConfig, OutputFormat, Streams};
use crate::model::ResultSet;
use crate::split::SplitConfig;
use crate::unify::unify;
use crate::RenderError;

/// Everything the pipeline needs besides the results themselves.
///
/// Defaults: retain only `stdout`, no error filters, line output, no split,
/// no unify, default heading and prefix templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub filter: FieldFilter,
    pub format: OutputFormat,
    /// Split `stdout`/`stderr` into line sequences (structured formats only).
    pub split: Option<SplitConfig>,
    /// Collapse all machines into one `all` entry (structured formats only).
    pub unify: bool,
    pub lines: LinesConfig,
}

/// A configured pipeline. Rendering is a pure function of the results and
/// this configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Filter, split and unify, without rendering.
    pub fn shape(&self, mut results: ResultSet) -> ResultSet {
        let config = &self.config;
        config.filter.apply(&mut results);
        tracing::debug!(machines = results.len(), format = %config.format, "filtered results");

        if config.format.is_structured() {
            if let Some(split) = &config.split {
                split.apply(&mut results);
            }
            if config.unify {
                results = unify(results, config.filter.retain);
            }
        }
        results
    }

    /// Shape `results` and write them to `streams`.
    pub fn run(&self, results: ResultSet, streams: &mut Streams<'_>) -> Result<(), RenderError> {
        let shaped = self.shape(results);
        format::render(
            &shaped,
            self.config.filter.retain,
            self.config.format,
            &self.config.lines,
            streams,
        )
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
