// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatching a command to every machine of a network.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::task::JoinSet;

use pvx_core::{ExecutionRecord, MachineId};

use crate::network::{MachineSpec, Network, MACHINE_ID_ENV};
use crate::{Command, ExecError};

/// Outcome category reported in each record's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    /// The process ran and exited with a code.
    Ok,
    /// The process ran and was terminated by a signal.
    Signaled,
    /// The process could not be started.
    Error,
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Ok => "ok",
            DispatchStatus::Signaled => "signaled",
            DispatchStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs a command on every machine of a network and collects one record per
/// machine, in completion order.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn run(
        &self,
        network: &Network,
        command: &Command,
    ) -> Result<Vec<(MachineId, ExecutionRecord)>, ExecError>;
}

/// Spawns one local process per machine (through its launcher, if any).
#[derive(Debug, Clone)]
pub struct LocalExecutor {
    cwd: PathBuf,
}

impl LocalExecutor {
    /// Processes run in `cwd`; remote launchers decide their own directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

#[async_trait]
impl Executor for LocalExecutor {
    async fn run(
        &self,
        network: &Network,
        command: &Command,
    ) -> Result<Vec<(MachineId, ExecutionRecord)>, ExecError> {
        tracing::info!(
            network = network.name(),
            machines = network.machines().len(),
            program = command.program(),
            "dispatching command"
        );

        let mut tasks = JoinSet::new();
        for machine in network.machines() {
            let machine = machine.clone();
            let command = command.clone();
            let cwd = self.cwd.clone();
            tasks.spawn(async move {
                let record = run_machine(&machine, &command, &cwd).await;
                (MachineId::new(machine.id), record)
            });
        }

        let mut results = Vec::with_capacity(network.machines().len());
        while let Some(joined) = tasks.join_next().await {
            results.push(joined?);
        }
        Ok(results)
    }
}

async fn run_machine(machine: &MachineSpec, command: &Command, cwd: &Path) -> ExecutionRecord {
    let argv = machine.argv(command);
    let Some((program, args)) = argv.split_first() else {
        return spawn_failed(machine, "", "empty argv");
    };

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args)
        .envs(&machine.env)
        .env(MACHINE_ID_ENV, &machine.id)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if machine.is_local() {
        cmd.current_dir(cwd);
    }

    match cmd.output().await {
        Ok(output) => {
            let returncode = output.status.code();
            let status =
                if returncode.is_some() { DispatchStatus::Ok } else { DispatchStatus::Signaled };
            tracing::debug!(machine = %machine.id, ?returncode, "machine finished");
            ExecutionRecord {
                status: status.to_string(),
                returncode,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
        Err(e) => spawn_failed(machine, program, &e.to_string()),
    }
}

fn spawn_failed(machine: &MachineSpec, program: &str, reason: &str) -> ExecutionRecord {
    tracing::warn!(machine = %machine.id, program, error = reason, "failed to spawn");
    ExecutionRecord {
        status: DispatchStatus::Error.to_string(),
        returncode: None,
        stdout: String::new(),
        stderr: format!("failed to spawn `{}`: {}", program, reason),
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Command, ExecError, Executor, Network};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pvx_core::{ExecutionRecord, MachineId};
    use std::sync::Arc;

    /// Recorded dispatch
    #[derive(Debug, Clone)]
    pub struct ExecCall {
        pub network: String,
        pub argv: Vec<String>,
    }

    struct FakeExecutorState {
        records: Vec<(MachineId, ExecutionRecord)>,
        calls: Vec<ExecCall>,
    }

    /// Fake executor returning canned records
    #[derive(Clone)]
    pub struct FakeExecutor {
        inner: Arc<Mutex<FakeExecutorState>>,
    }

    impl FakeExecutor {
        pub fn new(records: Vec<(MachineId, ExecutionRecord)>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeExecutorState { records, calls: Vec::new() })),
            }
        }

        /// Get all recorded dispatches
        pub fn calls(&self) -> Vec<ExecCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl Executor for FakeExecutor {
        async fn run(
            &self,
            network: &Network,
            command: &Command,
        ) -> Result<Vec<(MachineId, ExecutionRecord)>, ExecError> {
            let mut state = self.inner.lock();
            state.calls.push(ExecCall { network: network.name().to_string(), argv: command.argv() });
            Ok(state.records.clone())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecCall, FakeExecutor};

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
