// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command line surface.

use clap::Parser;
use std::path::PathBuf;

use pvx_core::{
    ConfigError, FieldFilter, FieldKind, FieldSet, LinesConfig, OutputFormat, PipelineConfig,
    Separator, SplitConfig, Template,
};
use pvx_exec::{Command, ExecError, DEFAULT_NETWORK};

use crate::env::Templates;

#[derive(Parser, Debug)]
#[command(
    name = "pvx",
    version,
    about = "Run a command on a network of machines",
    long_about = "Run a command on a network of machines.\n\n\
        JSON and YAML output is organized under machine id and includes the \
        response status (\"status\"), the exit code (\"returncode\"), \"stderr\" \
        and \"stdout\".\n\n\
        In lines mode only stdout is written to stdout; everything else goes to \
        stderr.",
    styles = crate::color::styles(),
    args_override_self = true,
)]
pub struct Cli {
    /// Networks configuration file
    #[arg(short = 'c', value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Network to run on
    #[arg(short = 'N', value_name = "NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Output format: lines, json or yaml
    #[arg(long, value_name = "FORMAT", overrides_with_all = ["json", "yaml", "lines"])]
    pub format: Option<String>,

    /// JSON output
    #[arg(long, overrides_with_all = ["format", "yaml", "lines"])]
    pub json: bool,

    /// YAML output
    #[arg(long, overrides_with_all = ["format", "json", "lines"])]
    pub yaml: bool,

    /// Line output (default)
    #[arg(long, overrides_with_all = ["format", "json", "yaml"])]
    pub lines: bool,

    /// Group line output under a heading per machine and field
    #[arg(long)]
    pub group: bool,

    /// Heading template for groups (%m = machine id, %t = field)
    #[arg(long, value_name = "FORMAT", overrides_with = "no_heading")]
    pub heading: Option<String>,

    /// Do not print group headings
    #[arg(long, overrides_with = "heading")]
    pub no_heading: bool,

    /// Prefix template for every output line (see --heading)
    #[arg(long, value_name = "FORMAT", overrides_with = "no_prefix")]
    pub prefix: Option<String>,

    /// Do not prefix output lines
    #[arg(long, overrides_with = "prefix")]
    pub no_prefix: bool,

    /// Show empty values too (with --group)
    #[arg(long)]
    pub empty: bool,

    /// Drop machines whose exit code is not 0
    #[arg(short = 'I', long)]
    pub ignore_on_error: bool,

    /// Show only machines whose exit code is not 0
    #[arg(long)]
    pub on_error: bool,

    /// Do not show stdout
    #[arg(long)]
    pub no_stdout: bool,

    /// Show stderr
    #[arg(long)]
    pub stderr: bool,

    /// Show exit code
    #[arg(long)]
    pub returncode: bool,

    /// Show dispatch status
    #[arg(long)]
    pub status: bool,

    /// Split stdout/stderr into lines (json and yaml)
    #[arg(long)]
    pub split: bool,

    /// Split separator; "" splits on whitespace [default: "\n"]
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub split_sep: Option<String>,

    /// Drop a trailing empty piece after splitting
    #[arg(long)]
    pub split_trim: bool,

    /// Merge all machines' values into one "all" entry (json and yaml)
    #[arg(long)]
    pub unify: bool,

    /// Same as --unify --split --split-trim
    #[arg(long)]
    pub unify_up: bool,

    /// Run the command through /bin/sh -c
    #[arg(long)]
    pub shell: bool,

    /// Command and its arguments
    #[arg(required = true, trailing_var_arg = true, value_name = "CMD")]
    pub command: Vec<String>,
}

impl Cli {
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        if self.json {
            return Ok(OutputFormat::Json);
        }
        if self.yaml {
            return Ok(OutputFormat::Yaml);
        }
        if self.lines {
            return Ok(OutputFormat::Lines);
        }
        match &self.format {
            Some(name) => name.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn retained_fields(&self) -> FieldSet {
        let mut fields = FieldSet::EMPTY;
        let wanted = [
            (FieldKind::Stdout, !self.no_stdout),
            (FieldKind::Stderr, self.stderr),
            (FieldKind::Returncode, self.returncode),
            (FieldKind::Status, self.status),
        ];
        for (kind, on) in wanted {
            if on {
                fields.insert(kind);
            }
        }
        fields
    }

    /// Build the pipeline configuration. Templates fall back to `defaults`.
    pub fn pipeline_config(&self, defaults: &Templates) -> Result<PipelineConfig, ConfigError> {
        let split = (self.split || self.unify_up).then(|| {
            let separator = self.split_sep.as_deref().map(Separator::parse).unwrap_or_default();
            SplitConfig::new(separator, self.split_trim || self.unify_up)
        });

        let heading = if self.no_heading {
            ""
        } else {
            self.heading.as_deref().unwrap_or(&defaults.heading)
        };
        let prefix =
            if self.no_prefix { "" } else { self.prefix.as_deref().unwrap_or(&defaults.prefix) };

        Ok(PipelineConfig {
            filter: FieldFilter {
                retain: self.retained_fields(),
                ignore_on_error: self.ignore_on_error,
                show_on_error_only: self.on_error,
            },
            format: self.output_format()?,
            split,
            unify: self.unify || self.unify_up,
            lines: LinesConfig {
                group: self.group,
                heading: Template::parse(heading),
                prefix: Template::parse(prefix),
                show_empty: self.empty,
            },
        })
    }

    pub fn to_command(&self) -> Result<Command, ExecError> {
        if self.shell {
            Command::shell(self.command.clone())
        } else {
            Command::new(self.command.clone())
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
