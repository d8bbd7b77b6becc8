// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use similar_asserts::assert_eq;

use super::*;
use crate::model::{ExecutionRecord, FieldKind, FieldSet, MachineId, Value, UNIFIED_KEY};
use crate::split::Separator;
use crate::template::Template;

fn machine(id: &str, code: i32, stdout: &str) -> (MachineId, ExecutionRecord) {
    (
        MachineId::from(id),
        ExecutionRecord {
            status: "ok".to_string(),
            returncode: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        },
    )
}

fn run(pipeline: &Pipeline, results: ResultSet) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    {
        let mut streams = Streams::new(&mut out, &mut err);
        pipeline.run(results, &mut streams).unwrap();
    }
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn json_config() -> PipelineConfig {
    PipelineConfig { format: OutputFormat::Json, ..PipelineConfig::default() }
}

#[test]
fn unify_up_yields_single_all_entry() {
    let config = PipelineConfig {
        split: Some(SplitConfig::new(Separator::default(), true)),
        unify: true,
        ..json_config()
    };
    let results = ResultSet::from_records([machine("m1", 0, "1\n2\n"), machine("m2", 0, "3\n")]);

    let (out, err) = run(&Pipeline::new(config), results);

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, serde_json::json!({ "all": { "stdout": ["1", "2", "3"] } }));
    assert_eq!(err, "");
}

#[test]
fn whitespace_split_in_structured_mode() {
    let config = PipelineConfig {
        split: Some(SplitConfig::new(Separator::parse(""), false)),
        ..json_config()
    };
    let shaped = Pipeline::new(config).shape(ResultSet::from_records([machine("m1", 0, "x y\tz")]));
    assert_eq!(
        shaped.get("m1").unwrap().get(FieldKind::Stdout),
        Some(&Value::Seq(vec![Value::from("x"), Value::from("y"), Value::from("z")]))
    );
}

#[test]
fn unify_without_split_concatenates_scalars() {
    let mut config = PipelineConfig { unify: true, ..json_config() };
    config.filter.retain = FieldSet::only(FieldKind::Stdout).with(FieldKind::Returncode);
    let results = ResultSet::from_records([machine("b", 2, "B"), machine("a", 0, "A")]);

    let shaped = Pipeline::new(config).shape(results);

    let all = shaped.get(UNIFIED_KEY).unwrap();
    assert_eq!(
        all.get(FieldKind::Stdout),
        Some(&Value::Seq(vec![Value::from("A"), Value::from("B")]))
    );
    assert_eq!(all.get(FieldKind::Returncode), Some(&Value::Seq(vec![Value::Int(0), Value::Int(2)])));
}

#[test]
fn split_and_unify_do_not_apply_to_lines() {
    let config = PipelineConfig {
        split: Some(SplitConfig::new(Separator::Whitespace, true)),
        unify: true,
        lines: LinesConfig { prefix: Template::parse("[%m]:"), ..LinesConfig::default() },
        ..PipelineConfig::default()
    };
    let results = ResultSet::from_records([machine("m1", 0, "a b\n")]);

    let (out, _) = run(&Pipeline::new(config), results);
    assert_eq!(out, "[m1]:a b\n");
}

#[test]
fn ignore_on_error_hides_failed_machine_in_lines() {
    let mut config = PipelineConfig::default();
    config.filter.ignore_on_error = true;
    config.filter.retain = FieldSet::all();
    let results = ResultSet::from_records([machine("bad", 1, "nope\n"), machine("good", 0, "yes\n")]);

    let (out, err) = run(&Pipeline::new(config), results);

    assert!(!out.contains("bad"));
    assert!(!err.contains("bad"));
    assert_eq!(out, "[good][stdout]:yes\n");
}

#[test]
fn everything_filtered_out_is_valid_output() {
    let mut config = json_config();
    config.filter.show_on_error_only = true;
    let results = ResultSet::from_records([machine("m1", 0, "fine\n")]);

    let (out, _) = run(&Pipeline::new(config), results);
    assert_eq!(out, "{}\n");
}

#[test]
fn yaml_unified_output() {
    let config = PipelineConfig {
        format: OutputFormat::Yaml,
        split: Some(SplitConfig::new(Separator::default(), true)),
        unify: true,
        ..PipelineConfig::default()
    };
    let results = ResultSet::from_records([machine("m1", 0, "1\n"), machine("m2", 0, "2\n")]);

    let (out, _) = run(&Pipeline::new(config), results);
    let parsed: serde_json::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(parsed, serde_json::json!({ "all": { "stdout": ["1", "2"] } }));
}
