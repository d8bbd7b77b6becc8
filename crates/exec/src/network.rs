// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Network configuration and boot.
//!
//! A network is a named list of machines:
//!
//! ```toml
//! [networks.default]
//! machines = [
//!     { id = "m1" },
//!     { id = "m2", launcher = ["ssh", "host2"], env = { REGION = "b" } },
//! ]
//! ```
//!
//! A machine with an empty launcher runs the command locally.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::{Command, ExecError};

/// Name of the network used when none is requested.
pub const DEFAULT_NETWORK: &str = "default";

/// Machine id of the built-in local network.
pub const LOCAL_MACHINE: &str = "localhost";

/// Environment variable exported to every dispatched process.
pub const MACHINE_ID_ENV: &str = "PVX_MACHINE_ID";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineSpec {
    pub id: String,
    /// Argv prefix used to reach the machine; empty means local.
    #[serde(default)]
    pub launcher: Vec<String>,
    /// Extra environment for processes dispatched to this machine.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl MachineSpec {
    pub fn local(id: impl Into<String>) -> Self {
        Self { id: id.into(), launcher: Vec::new(), env: BTreeMap::new() }
    }

    pub fn is_local(&self) -> bool {
        self.launcher.is_empty()
    }

    /// Launcher followed by the command's argv.
    pub fn argv(&self, command: &Command) -> Vec<String> {
        self.launcher.iter().cloned().chain(command.argv()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkSpec {
    #[serde(default)]
    pub machines: Vec<MachineSpec>,
}

/// Contents of a networks file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkSpec>,
}

impl NetworkConfig {
    /// Network `default` with a single local machine.
    pub fn builtin() -> Self {
        let spec = NetworkSpec { machines: vec![MachineSpec::local(LOCAL_MACHINE)] };
        Self { networks: BTreeMap::from([(DEFAULT_NETWORK.to_string(), spec)]) }
    }

    /// Parse TOML text; `path` is used for error messages only.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ExecError> {
        toml::from_str(text)
            .map_err(|source| ExecError::ParseConfig { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self, ExecError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ExecError::ReadConfig { path: path.to_path_buf(), source })?;
        Self::parse(&text, path)
    }

    /// Pick the configuration source.
    ///
    /// An explicit path (`-c`) or an environment path must exist. The default
    /// location is optional; without it the built-in network is used.
    pub fn resolve(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ExecError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = from_env {
            return Self::load(&path);
        }
        match default_path {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no networks file, using built-in local network");
                Ok(Self::builtin())
            }
        }
    }
}

/// A booted network: resolved and validated, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    name: String,
    machines: Vec<MachineSpec>,
}

impl Network {
    /// Resolve `name` in `config`.
    ///
    /// Fails for unknown networks, networks without machines, and duplicate
    /// machine ids.
    pub fn boot(config: &NetworkConfig, name: &str) -> Result<Self, ExecError> {
        let boot_error =
            |reason: String| ExecError::Boot { network: name.to_string(), reason };

        let spec = config
            .networks
            .get(name)
            .ok_or_else(|| boot_error("no such network".to_string()))?;
        if spec.machines.is_empty() {
            return Err(boot_error("network has no machines".to_string()));
        }

        let mut seen = HashSet::new();
        for machine in &spec.machines {
            if machine.id.is_empty() {
                return Err(boot_error("machine with empty id".to_string()));
            }
            if !seen.insert(machine.id.as_str()) {
                return Err(boot_error(format!("duplicate machine id ({})", machine.id)));
            }
        }

        tracing::debug!(network = name, machines = spec.machines.len(), "network booted");
        Ok(Self { name: name.to_string(), machines: spec.machines.clone() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn machines(&self) -> &[MachineSpec] {
        &self.machines
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
