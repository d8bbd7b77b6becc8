// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a temporary network of local machines and a small
//! assertion layer over `assert_cmd`.

use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test run.
const SCRUBBED_ENV: &[&str] =
    &["PVX_CONFIG", "PVX_HEADING_FORMAT", "PVX_PREFIX_FORMAT", "PVX_LOG", "COLOR"];

/// `pvx` with a scrubbed environment and the built-in network.
pub fn cli() -> CliBuilder {
    CliBuilder::new(None)
}

/// A temporary directory holding a `networks.toml`.
pub struct Network {
    dir: TempDir,
}

impl Network {
    /// A `default` network of local machines with the given ids.
    pub fn local(ids: &[&str]) -> Self {
        let machines: Vec<String> = ids.iter().map(|id| format!("{{ id = \"{id}\" }}")).collect();
        Self::from_toml(&format!("[networks.default]\nmachines = [{}]\n", machines.join(", ")))
    }

    pub fn from_toml(text: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("networks.toml"), text).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("networks.toml")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// `pvx` pointed at this network file through `PVX_CONFIG`.
    pub fn pvx(&self) -> CliBuilder {
        CliBuilder::new(Some(self.path()))
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    fn new(config: Option<PathBuf>) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("pvx").unwrap();
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1");
        // keep the user's own networks file out of reach
        cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("pvx-specs-no-config"));
        if let Some(path) = config {
            cmd.env("PVX_CONFIG", path);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and assert exit code 0.
    pub fn passes(mut self) -> RunAssert {
        RunAssert { assert: self.cmd.assert().success() }
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(mut self) -> RunAssert {
        RunAssert { assert: self.cmd.assert().failure() }
    }

    /// Run and assert the given exit code.
    pub fn exits_with(mut self, code: i32) -> RunAssert {
        RunAssert { assert: self.cmd.assert().code(code) }
    }
}

pub struct RunAssert {
    assert: assert_cmd::assert::Assert,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        Self { assert: self.assert.stdout(predicate::str::contains(expected)) }
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self { assert: self.assert.stderr(predicate::str::contains(expected)) }
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    /// Parse stdout as one JSON document.
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout()))
    }
}
