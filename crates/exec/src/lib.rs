// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pvx-exec: booting a network of machines and dispatching a command to each
//! of them, producing the records `pvx-core` shapes and renders.

pub mod command;
pub mod error;
pub mod executor;
pub mod network;

pub use command::{Command, SHELL};
pub use error::ExecError;
pub use executor::{DispatchStatus, Executor, LocalExecutor};
#[cfg(any(test, feature = "test-support"))]
pub use executor::{ExecCall, FakeExecutor};
pub use network::{
    MachineSpec, Network, NetworkConfig, NetworkSpec, DEFAULT_NETWORK, LOCAL_MACHINE,
    MACHINE_ID_ENV,
};
