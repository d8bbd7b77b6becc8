// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command dispatched to every machine.

use crate::ExecError;

/// Shell used for `--shell` commands.
pub const SHELL: &str = "/bin/sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
}

impl Command {
    /// Build from an argv; the first element is the program.
    pub fn new(argv: Vec<String>) -> Result<Self, ExecError> {
        let mut argv = argv.into_iter();
        let program = argv.next().ok_or(ExecError::MissingCommand)?;
        Ok(Self { program, args: argv.collect() })
    }

    /// Run `script` through [`SHELL`] with `-c`. Remaining arguments become
    /// the script's positional parameters (`$0`, `$1`, ...).
    pub fn shell(argv: Vec<String>) -> Result<Self, ExecError> {
        let mut argv = argv.into_iter();
        let script = argv.next().ok_or(ExecError::MissingCommand)?;
        let mut args = vec!["-c".to_string(), script];
        args.extend(argv);
        Ok(Self { program: SHELL.to_string(), args })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argv, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone()).chain(self.args.iter().cloned()).collect()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
