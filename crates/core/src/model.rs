// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result model: machine identifiers, per-machine records, and the result set.
//!
//! The execution collaborator hands over [`ExecutionRecord`]s with every field
//! present. Inside the pipeline each field of a [`Record`] is an `Option`:
//! `None` means the field was removed by filtering, which is different from an
//! empty string or an absent return code (`Some(Value::Null)`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ConfigError;

/// Key of the synthetic entry that replaces every machine after unification.
pub const UNIFIED_KEY: &str = "all";

/// Opaque identifier of one target machine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(String);

impl MachineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for MachineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MachineId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MachineId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One of the four fields a machine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Stdout,
    Stderr,
    Returncode,
    Status,
}

crate::named_enum! {
    FieldKind, ConfigError::UnknownField {
        Stdout => "stdout",
        Stderr => "stderr",
        Returncode => "returncode",
        Status => "status",
    }
}

impl FieldKind {
    /// Rendering and serialization order. Line-oriented output depends on it.
    pub const ALL: [FieldKind; 4] =
        [FieldKind::Stdout, FieldKind::Stderr, FieldKind::Returncode, FieldKind::Status];

    /// Whether the field carries a captured text blob (and can be split).
    pub fn is_blob(self) -> bool {
        matches!(self, FieldKind::Stdout | FieldKind::Stderr)
    }

    fn bit(self) -> u8 {
        match self {
            FieldKind::Stdout => 0b0001,
            FieldKind::Stderr => 0b0010,
            FieldKind::Returncode => 0b0100,
            FieldKind::Status => 0b1000,
        }
    }
}

/// Set of retained field kinds. Iterates in [`FieldKind::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet(u8);

impl FieldSet {
    pub const EMPTY: FieldSet = FieldSet(0);

    pub fn all() -> Self {
        FieldKind::ALL.into_iter().collect()
    }

    pub fn only(kind: FieldKind) -> Self {
        Self(kind.bit())
    }

    pub fn with(mut self, kind: FieldKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn insert(&mut self, kind: FieldKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: FieldKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: FieldKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldKind> + '_ {
        FieldKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }
}

impl FromIterator<FieldKind> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldKind>>(iter: I) -> Self {
        let mut set = FieldSet::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

/// Outcome of dispatching the command to one machine, as handed over by the
/// execution collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Outcome category of the dispatch (not the exit code).
    pub status: String,
    /// Process exit code; `None` if the process never ran or was signaled.
    pub returncode: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// A field value as it flows through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i32),
    Text(String),
    Seq(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("none"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Option<i32>> for Value {
    fn from(code: Option<i32>) -> Self {
        code.map_or(Value::Null, Value::Int)
    }
}

/// Per-machine record inside the pipeline. A `None` field has been removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returncode: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl Record {
    pub fn get(&self, kind: FieldKind) -> Option<&Value> {
        self.slot(kind).as_ref()
    }

    pub fn set(&mut self, kind: FieldKind, value: Value) {
        *self.slot_mut(kind) = Some(value);
    }

    /// Remove a field, returning its value.
    pub fn take(&mut self, kind: FieldKind) -> Option<Value> {
        self.slot_mut(kind).take()
    }

    pub fn slot(&self, kind: FieldKind) -> &Option<Value> {
        match kind {
            FieldKind::Stdout => &self.stdout,
            FieldKind::Stderr => &self.stderr,
            FieldKind::Returncode => &self.returncode,
            FieldKind::Status => &self.status,
        }
    }

    pub fn slot_mut(&mut self, kind: FieldKind) -> &mut Option<Value> {
        match kind {
            FieldKind::Stdout => &mut self.stdout,
            FieldKind::Stderr => &mut self.stderr,
            FieldKind::Returncode => &mut self.returncode,
            FieldKind::Status => &mut self.status,
        }
    }

    /// Kinds still present on this record, in [`FieldKind::ALL`] order.
    pub fn present(&self) -> FieldSet {
        FieldKind::ALL.into_iter().filter(|kind| self.slot(*kind).is_some()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }

    /// True only for a present, integer return code of zero.
    pub fn succeeded(&self) -> bool {
        matches!(self.returncode, Some(Value::Int(0)))
    }
}

impl From<ExecutionRecord> for Record {
    fn from(rec: ExecutionRecord) -> Self {
        Self {
            stdout: Some(Value::Text(rec.stdout)),
            stderr: Some(Value::Text(rec.stderr)),
            returncode: Some(rec.returncode.into()),
            status: Some(Value::Text(rec.status)),
        }
    }
}

/// Mapping of machine to record, kept in insertion (completion) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: IndexMap<MachineId, Record>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the collaborator's output, preserving its order.
    pub fn from_records(records: impl IntoIterator<Item = (MachineId, ExecutionRecord)>) -> Self {
        records.into_iter().map(|(id, rec)| (id, Record::from(rec))).collect()
    }

    pub fn insert(&mut self, id: MachineId, record: Record) -> Option<Record> {
        self.records.insert(id, record)
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.records.get_mut(id)
    }

    /// Remove a machine, keeping the order of the remaining ones.
    pub fn remove(&mut self, id: &str) -> Option<Record> {
        self.records.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Machine ids in insertion order.
    pub fn machine_ids(&self) -> impl Iterator<Item = &MachineId> {
        self.records.keys()
    }

    /// Machine ids in lexicographic order.
    pub fn sorted_ids(&self) -> Vec<MachineId> {
        let mut ids: Vec<MachineId> = self.records.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MachineId, &Record)> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&MachineId, &mut Record)> {
        self.records.iter_mut()
    }

    /// Keep only machines for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&MachineId, &Record) -> bool) {
        self.records.retain(|id, record| keep(id, record));
    }
}

impl FromIterator<(MachineId, Record)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (MachineId, Record)>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl IntoIterator for ResultSet {
    type Item = (MachineId, Record);
    type IntoIter = indexmap::map::IntoIter<MachineId, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
