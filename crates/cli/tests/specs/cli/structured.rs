// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON and YAML output.

use serde_json::json;

use crate::prelude::*;

#[test]
fn json_keys_by_machine_with_selected_fields() {
    let net = Network::local(&["m1", "m2"]);
    let run = net
        .pvx()
        .args(&["--json", "--returncode", "--status", "--shell", "echo $PVX_MACHINE_ID"])
        .passes();
    similar_asserts::assert_eq!(
        run.stdout_json(),
        json!({
            "m1": { "stdout": "m1\n", "returncode": 0, "status": "ok" },
            "m2": { "stdout": "m2\n", "returncode": 0, "status": "ok" },
        })
    );
}

#[test]
fn unify_up_merges_split_lines() {
    let net = Network::local(&["m1", "m2"]);
    let run = net
        .pvx()
        .args(&[
            "--json",
            "--unify-up",
            "--shell",
            "if [ $PVX_MACHINE_ID = m1 ]; then printf '1\\n2\\n'; else printf '3\\n'; fi",
        ])
        .passes();
    similar_asserts::assert_eq!(run.stdout_json(), json!({ "all": { "stdout": ["1", "2", "3"] } }));
}

#[test]
fn split_on_whitespace() {
    let net = Network::local(&["m1"]);
    let run = net
        .pvx()
        .args(&["--json", "--split", "--split-sep", "", "--shell", "printf 'x y\\tz'"])
        .passes();
    similar_asserts::assert_eq!(run.stdout_json(), json!({ "m1": { "stdout": ["x", "y", "z"] } }));
}

#[test]
fn split_is_ignored_in_lines_mode() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--split", "--unify", "--no-prefix", "--shell", "printf 'a\\nb\\n'"])
        .passes()
        .stdout_eq("a\nb\n");
}

#[test]
fn yaml_output() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--yaml", "--returncode", "--shell", "exit 4"])
        .passes()
        .stdout_eq("m1:\n  stdout: ''\n  returncode: 4\n");
}

#[test]
fn last_format_flag_wins() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--json", "--format", "lines", "--no-prefix", "echo", "plain"])
        .passes()
        .stdout_eq("plain\n");
}

#[test]
fn all_filtered_out_gives_empty_document() {
    let net = Network::local(&["m1"]);
    net.pvx().args(&["--json", "-I", "false"]).passes().stdout_eq("{}\n");
}

#[test]
fn repeated_flags_are_accepted() {
    let net = Network::local(&["m1"]);
    net.pvx()
        .args(&["--json", "--json", "--lines", "--prefix", "a:", "--prefix", "b:", "echo", "x"])
        .passes()
        .stdout_eq("b:x\n");
}
