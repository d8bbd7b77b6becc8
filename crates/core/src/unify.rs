// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collapsing every machine's values into one synthetic `all` entry.

use crate::model::{FieldSet, MachineId, Record, ResultSet, Value, UNIFIED_KEY};

/// Merge per-machine values of each retained field into one sequence.
///
/// Machines are visited in sorted id order. Sequence values are extended,
/// scalar values are appended as one element. The returned set holds a single
/// entry keyed [`UNIFIED_KEY`] with one sequence per retained field, empty when
/// no machine contributed.
pub fn unify(mut results: ResultSet, fields: FieldSet) -> ResultSet {
    let order = results.sorted_ids();
    let mut unified = Record::default();

    for kind in fields.iter() {
        let mut combined = Vec::new();
        for id in &order {
            let taken = results.get_mut(id.as_str()).and_then(|record| record.take(kind));
            match taken {
                Some(Value::Seq(items)) => combined.extend(items),
                Some(scalar) => combined.push(scalar),
                None => {}
            }
        }
        unified.set(kind, Value::Seq(combined));
    }

    tracing::debug!(machines = order.len(), "unified results");
    std::iter::once((MachineId::from(UNIFIED_KEY), unified)).collect()
}

#[cfg(test)]
#[path = "unify_tests.rs"]
mod tests;
