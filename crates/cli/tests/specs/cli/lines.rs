// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented output.

use crate::prelude::*;

#[test]
fn prefixes_each_machine_in_sorted_order() {
    let net = Network::local(&["m2", "m1"]);
    net.pvx()
        .args(&["--shell", "echo hi from $PVX_MACHINE_ID"])
        .passes()
        .stdout_eq("[m1][stdout]:hi from m1\n[m2][stdout]:hi from m2\n");
}

#[test]
fn stderr_is_routed_to_stderr() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--stderr", "--shell", "echo out; echo err >&2"])
        .passes()
        .stdout_eq("[m1][stdout]:out\n")
        .stderr_eq("[m1][stderr]:err\n");
}

#[test]
fn returncode_goes_to_stderr_and_does_not_fail_pvx() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--no-stdout", "--returncode", "--prefix", "%m=", "--shell", "exit 7"])
        .passes()
        .stdout_eq("")
        .stderr_eq("m1=7\n");
}

#[test]
fn grouped_output_has_headings() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--group", "--shell", "printf 'a\\nb\\n'"])
        .passes()
        .stdout_eq("----- [m1][stdout] -----\na\nb\n");
}

#[test]
fn heading_template_comes_from_environment() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .env("PVX_HEADING_FORMAT", "== %(machid)s %(stdtype)s ==")
        .args(&["--group", "echo", "x"])
        .passes()
        .stdout_eq("== m1 stdout ==\nx\n");
}

#[test]
fn arguments_pass_through_verbatim() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--no-prefix", "echo", "--json", "-N"])
        .passes()
        .stdout_eq("--json -N\n");
}

#[test]
fn ignore_on_error_hides_failed_machines() {
    let net = Network::local(&["good", "bad"]);
    net.pvx()
        .args(&["-I", "--shell", "echo $PVX_MACHINE_ID; test $PVX_MACHINE_ID = good"])
        .passes()
        .stdout_eq("[good][stdout]:good\n");
}

#[test]
fn on_error_shows_only_failed_machines() {
    let net = Network::local(&["good", "bad"]);
    net.pvx()
        .args(&["--on-error", "--shell", "echo $PVX_MACHINE_ID; test $PVX_MACHINE_ID = good"])
        .passes()
        .stdout_eq("[bad][stdout]:bad\n");
}

#[test]
fn runs_in_current_directory() {
    let net = Network::local(&["m1"]);
    std::fs::write(net.dir().join("note.txt"), "from disk\n").unwrap();
    net.pvx()
        .current_dir(net.dir())
        .args(&["--no-prefix", "cat", "note.txt"])
        .passes()
        .stdout_eq("from disk\n");
}

#[test]
fn builtin_network_runs_on_localhost() {
    cli().args(&["echo", "hello"]).passes().stdout_eq("[localhost][stdout]:hello\n");
}
