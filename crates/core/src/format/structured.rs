// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON and YAML rendering: machine → field → value, in result-set order.

use std::io::Write;

use super::emit;
use crate::model::ResultSet;
use crate::RenderError;

/// Pretty-printed JSON (two-space indent) followed by a newline.
pub fn render_json(results: &ResultSet, out: &mut dyn Write) -> Result<(), RenderError> {
    let mut doc = serde_json::to_string_pretty(results)?;
    doc.push('\n');
    emit(out, doc.as_bytes())
}

/// Block-style YAML document.
pub fn render_yaml(results: &ResultSet, out: &mut dyn Write) -> Result<(), RenderError> {
    let doc = serde_yaml::to_string(results)?;
    emit(out, doc.as_bytes())
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod tests;
