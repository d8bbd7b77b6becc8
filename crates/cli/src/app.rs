// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One invocation: validate options, boot the network, dispatch, render.
//!
//! Dispatch is the only await point. Rendering is synchronous, so an
//! interrupt can only be raced against dispatch; `main` handles interrupts
//! that arrive while rendering.

use std::future::Future;
use std::io::Write;

use pvx_core::{Pipeline, ResultSet, Streams};
use pvx_exec::{Command, Executor, Network, NetworkConfig};

use crate::args::Cli;
use crate::env::Settings;
use crate::exit_error::ExitError;

/// A validated invocation, ready to dispatch.
#[derive(Debug)]
pub struct Invocation {
    pipeline: Pipeline,
    command: Command,
    network: Network,
}

impl Invocation {
    /// Check options and boot the network. Nothing is dispatched or written.
    pub fn prepare(cli: &Cli, settings: &Settings) -> Result<Self, ExitError> {
        let config = cli.pipeline_config(&settings.templates).map_err(ExitError::failure)?;
        let command = cli.to_command().map_err(ExitError::failure)?;

        let networks = NetworkConfig::resolve(
            cli.config.as_deref(),
            settings.config_path.clone(),
            settings.default_config_path.clone(),
        )
        .map_err(ExitError::failure)?;
        let network = Network::boot(&networks, &cli.network).map_err(ExitError::failure)?;

        Ok(Self { pipeline: Pipeline::new(config), command, network })
    }

    /// Run the command on every machine, unless `interrupt` resolves first.
    ///
    /// `None` means interrupted; in-flight processes are dropped (and killed).
    pub async fn dispatch<E, I>(
        &self,
        executor: &E,
        interrupt: I,
    ) -> Result<Option<ResultSet>, ExitError>
    where
        E: Executor + ?Sized,
        I: Future<Output = ()>,
    {
        tokio::select! {
            records = executor.run(&self.network, &self.command) => {
                let records = records.map_err(ExitError::failure)?;
                Ok(Some(ResultSet::from_records(records)))
            }
            _ = interrupt => {
                tracing::debug!(network = self.network.name(), "interrupted during dispatch");
                Ok(None)
            }
        }
    }

    /// Shape and write `results`. A closed output pipe ends rendering quietly.
    pub fn render(
        &self,
        results: ResultSet,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ExitError> {
        let mut streams = Streams::new(out, err);
        match self.pipeline.run(results, &mut streams) {
            Ok(()) => Ok(()),
            Err(e) if e.is_broken_pipe() => {
                tracing::debug!("output closed early");
                Ok(())
            }
            Err(e) => Err(ExitError::failure(e)),
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
