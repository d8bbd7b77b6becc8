// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors: reported as `error: ...` with exit code 1.

use crate::prelude::*;

#[test]
fn unsupported_format_is_reported_before_running() {
    let net = Network::local(&["m1"]);
    let marker = net.dir().join("ran");
    net.pvx()
        .args(&["--format", "xml", "touch", marker.to_str().unwrap()])
        .exits_with(1)
        .stdout_eq("")
        .stderr_eq("error: unsupported format (xml)\n");
    assert!(!marker.exists());
}

#[test]
fn unknown_network_fails_to_boot() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["-N", "elsewhere", "true"])
        .exits_with(1)
        .stderr_has("error: failed to boot network (elsewhere)");
}

#[test]
fn explicit_config_overrides_environment() {
    let env_net = Network::local(&["from-env"]);
    let explicit = Network::local(&["from-flag"]);
    env_net
        .pvx()
        .args(&["-c", explicit.path().to_str().unwrap(), "echo", "x"])
        .passes()
        .stdout_eq("[from-flag][stdout]:x\n");
}

#[test]
fn missing_config_file_is_an_error() {
    let net = Network::local(&["m1"]);
    let missing = net.dir().join("missing.toml");
    cli().args(&["-c", missing.to_str().unwrap(), "true"]).fails().stderr_has("error:");
}

#[test]
fn malformed_config_names_the_file() {
    let net = Network::from_toml("[networks.default]\nhosts = 3\n");
    net.pvx().args(&["true"]).fails().stderr_has("networks.toml");
}

#[test]
fn unknown_option_is_usage_error() {
    cli().args(&["--frobnicate", "true"]).exits_with(2);
}

#[test]
fn failed_spawn_is_reported_per_machine() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--json", "--stderr", "--status", "/no/such/program"])
        .passes()
        .stdout_has("\"status\": \"error\"")
        .stdout_has("failed to spawn");
}
