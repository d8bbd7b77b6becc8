// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Machine and field filtering.

use crate::model::{FieldKind, FieldSet, ResultSet};

/// Which machines and fields survive into rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFilter {
    pub retain: FieldSet,
    /// Drop machines whose return code is not 0 (absent counts as not 0).
    pub ignore_on_error: bool,
    /// Drop machines whose return code is 0.
    pub show_on_error_only: bool,
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self {
            retain: FieldSet::only(FieldKind::Stdout),
            ignore_on_error: false,
            show_on_error_only: false,
        }
    }
}

impl FieldFilter {
    /// Apply the machine predicates, then strip every field not retained.
    ///
    /// Both predicates are applied when both are set, ignore-on-error first.
    /// The return code is consulted before field stripping, so the predicates
    /// work even when `returncode` is not retained.
    pub fn apply(&self, results: &mut ResultSet) {
        if self.ignore_on_error {
            results.retain(|id, record| {
                let keep = record.succeeded();
                if !keep {
                    tracing::debug!(machine = %id, "dropping failed machine (ignore-on-error)");
                }
                keep
            });
        }

        if self.show_on_error_only {
            results.retain(|id, record| {
                let keep = !record.succeeded();
                if !keep {
                    tracing::debug!(machine = %id, "dropping successful machine (on-error)");
                }
                keep
            });
        }

        for (_, record) in results.iter_mut() {
            for kind in FieldKind::ALL {
                if !self.retain.contains(kind) {
                    record.take(kind);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
