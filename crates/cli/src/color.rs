// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Flags and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders: medium grey
    pub const CONTEXT: u8 = 245;
    /// Error label: soft red
    pub const ERROR: u8 = 167;
}

/// Determine if color output should be enabled for a stream.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize(stream: &impl IsTerminal) -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    stream.is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Build clap `Styles` for help output.
pub fn styles() -> Styles {
    if !should_colorize(&std::io::stdout()) {
        return Styles::plain();
    }
    Styles::styled()
        .header(fg(codes::HEADER))
        .usage(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
        .error(fg(codes::ERROR).bold())
}

/// The `error:` label printed before a fatal message on stderr.
pub fn error_label() -> String {
    if should_colorize(&std::io::stderr()) {
        let style = fg(codes::ERROR).bold();
        format!("{style}error:{style:#}")
    } else {
        "error:".to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
