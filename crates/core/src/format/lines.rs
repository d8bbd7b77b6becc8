// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented rendering.
//!
//! Machines are visited in sorted id order and fields in the fixed
//! [`FieldKind::ALL`] order. Two styles:
//!
//! - grouped: an optional heading line, then the value verbatim
//! - non-grouped: one trailing newline trimmed, every line prefixed

use super::{emit, Streams};
use crate::model::{FieldKind, FieldSet, ResultSet};
use crate::template::{Template, DEFAULT_HEADING, DEFAULT_PREFIX};
use crate::RenderError;

/// Decoration options for line output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinesConfig {
    pub group: bool,
    pub heading: Template,
    pub prefix: Template,
    /// Print empty values in grouped mode. Ignored when not grouping.
    pub show_empty: bool,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            group: false,
            heading: Template::parse(DEFAULT_HEADING),
            prefix: Template::parse(DEFAULT_PREFIX),
            show_empty: false,
        }
    }
}

pub fn render_lines(
    results: &ResultSet,
    fields: FieldSet,
    config: &LinesConfig,
    streams: &mut Streams<'_>,
) -> Result<(), RenderError> {
    for id in results.sorted_ids() {
        let Some(record) = results.get(id.as_str()) else { continue };

        for kind in fields.iter() {
            let Some(value) = record.get(kind) else { continue };
            let text = value.to_string();
            if text.is_empty() && !(config.group && config.show_empty) {
                continue;
            }

            if config.group {
                render_group(streams, config, id.as_str(), kind, &text)?;
            } else {
                render_prefixed(streams, &config.prefix, id.as_str(), kind, &text)?;
            }
        }
    }
    Ok(())
}

fn render_group(
    streams: &mut Streams<'_>,
    config: &LinesConfig,
    machine: &str,
    kind: FieldKind,
    text: &str,
) -> Result<(), RenderError> {
    let stream = streams.for_field(kind);
    if !config.heading.is_empty() {
        let heading = format!("{}\n", config.heading.render(machine, kind));
        emit(stream, heading.as_bytes())?;
    }
    emit(stream, text.as_bytes())
}

fn render_prefixed(
    streams: &mut Streams<'_>,
    prefix: &Template,
    machine: &str,
    kind: FieldKind,
    text: &str,
) -> Result<(), RenderError> {
    let block = prefix_block(text, &prefix.render(machine, kind));
    if block.is_empty() {
        return Ok(());
    }
    emit(streams.for_field(kind), format!("{}\n", block).as_bytes())
}

/// Trim one trailing newline, then prefix every remaining line.
pub fn prefix_block(text: &str, prefix: &str) -> String {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').map(|line| format!("{}{}", prefix, line)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
