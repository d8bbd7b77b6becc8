// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting captured text blobs into line sequences.

use crate::model::{FieldKind, ResultSet, Value};

/// How a blob is cut into pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    /// Split on an exact string (never empty).
    Literal(String),
    /// Split on any run of whitespace; leading and trailing whitespace
    /// produce no empty pieces.
    Whitespace,
}

impl Separator {
    /// Parse a user-supplied separator. The empty string selects whitespace.
    pub fn parse(sep: &str) -> Self {
        if sep.is_empty() {
            Separator::Whitespace
        } else {
            Separator::Literal(sep.to_string())
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::Literal("\n".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitConfig {
    pub separator: Separator,
    /// Drop a single trailing empty piece (blob ended with the separator).
    pub trim: bool,
}

impl SplitConfig {
    pub fn new(separator: Separator, trim: bool) -> Self {
        Self { separator, trim }
    }

    /// Split one blob into lines.
    pub fn split(&self, blob: &str) -> Vec<String> {
        let mut lines: Vec<String> = match &self.separator {
            Separator::Literal(sep) => blob.split(sep.as_str()).map(str::to_string).collect(),
            Separator::Whitespace => blob.split_whitespace().map(str::to_string).collect(),
        };
        if self.trim && lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Convert the `stdout` and `stderr` text of every record into sequences.
    ///
    /// Removed fields stay removed; other field kinds are untouched.
    pub fn apply(&self, results: &mut ResultSet) {
        for (_, record) in results.iter_mut() {
            for kind in FieldKind::ALL.into_iter().filter(|kind| kind.is_blob()) {
                let slot = record.slot_mut(kind);
                if let Some(Value::Text(blob)) = slot.as_ref() {
                    let lines = self.split(blob).into_iter().map(Value::Text).collect();
                    *slot = Some(Value::Seq(lines));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
