// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pvx: run a command on a network of machines and shape the results.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod app;
mod args;
mod color;
mod env;
mod exit_error;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pvx_exec::LocalExecutor;

use crate::app::Invocation;
use crate::args::Cli;
use crate::env::Settings;
use crate::exit_error::{ExitError, FAILURE_EXIT, INTERRUPTED_EXIT};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let exit = ExitError::from(e);
            eprintln!("{} {}", color::error_label(), exit.message);
            ExitCode::from(u8::try_from(exit.code).unwrap_or(FAILURE_EXIT as u8))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init()?;
    let settings = Settings::from_env();
    let cwd = std::env::current_dir().context("cannot read working directory")?;
    let executor = LocalExecutor::new(cwd);

    let invocation = Invocation::prepare(&cli, &settings)?;
    let Some(results) = invocation.dispatch(&executor, interrupted()).await? else {
        return Ok(());
    };

    exit_on_interrupt();
    invocation.render(results, &mut std::io::stdout(), &mut std::io::stderr())?;
    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Ctrl-C during rendering ends the process on a worker thread, keeping
/// whatever was already written. Rendering never yields, even when blocked
/// on a stalled pipe.
fn exit_on_interrupt() {
    tokio::spawn(async {
        interrupted().await;
        tracing::debug!("interrupted during output");
        std::process::exit(INTERRUPTED_EXIT);
    });
}
