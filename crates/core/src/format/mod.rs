// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering a result set to standard output and standard error.
//!
//! - [`structured`] — one JSON or YAML document on stdout
//! - [`lines`] — decorated text lines, routed to stdout or stderr by field

pub mod lines;
pub mod structured;

use std::io::Write;

use crate::model::{FieldKind, FieldSet, ResultSet};
use crate::{ConfigError, RenderError};

pub use lines::LinesConfig;

/// Output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Lines,
}

crate::named_enum! {
    OutputFormat, ConfigError::UnsupportedFormat {
        Json => "json",
        Yaml => "yaml",
        Lines => "lines",
    }
}

impl OutputFormat {
    /// JSON and YAML share one nested data shape.
    pub fn is_structured(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}

/// The two output streams a render writes to.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// Stdout values go to stdout; every other field goes to stderr.
    pub fn for_field(&mut self, kind: FieldKind) -> &mut dyn Write {
        match kind {
            FieldKind::Stdout => &mut *self.out,
            FieldKind::Stderr | FieldKind::Returncode | FieldKind::Status => &mut *self.err,
        }
    }
}

/// Write and flush immediately so stdout/stderr interleave in emission order.
pub(crate) fn emit(stream: &mut dyn Write, bytes: &[u8]) -> Result<(), RenderError> {
    stream.write_all(bytes)?;
    stream.flush()?;
    Ok(())
}

/// Render `results` in the given format.
pub fn render(
    results: &ResultSet,
    fields: FieldSet,
    format: OutputFormat,
    lines: &LinesConfig,
    streams: &mut Streams<'_>,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Json => structured::render_json(results, &mut *streams.out),
        OutputFormat::Yaml => structured::render_yaml(results, &mut *streams.out),
        OutputFormat::Lines => lines::render_lines(results, fields, lines, streams),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
