// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heading and prefix templates.
//!
//! A template has two substitution points:
//!
//! - `%m` or `%(machid)s` — the machine id
//! - `%t` or `%(stdtype)s` — the field kind (`stdout`, `stderr`, ...)
//!
//! `%%` produces a literal `%`. Any other `%` sequence is kept verbatim.
//! An empty template disables the decoration it controls.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::FieldKind;

/// Default heading printed before each group in grouped line output.
pub const DEFAULT_HEADING: &str = "----- [%m][%t] -----";

/// Default prefix for every line in non-grouped line output.
pub const DEFAULT_PREFIX: &str = "[%m][%t]:";

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\((machid|stdtype)\)s|%([mt%])").expect("constant regex pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Machine,
    Field,
}

/// A parsed heading or prefix template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            literal.push_str(&source[last..whole.start()]);
            last = whole.end();

            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            let placeholder = match name {
                "machid" | "m" => Segment::Machine,
                "stdtype" | "t" => Segment::Field,
                _ => {
                    literal.push('%');
                    continue;
                }
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(placeholder);
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source: source.to_string(), segments }
    }

    /// Template text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// An empty template renders nothing and disables its decoration.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn render(&self, machine: &str, field: FieldKind) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Machine => out.push_str(machine),
                Segment::Field => out.push_str(field.as_str()),
            }
        }
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse("")
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
