use std::fs;
use std::path::Path;

use crate::standalone::{generate_file, output_path_for, render};
use crate::test_utils::parts;
use crate::{Config, Error, PartError};

const PARTS: &str = r#"{
    "Lamp": {"properties": {"On": "boolean"}, "events": {"Ready": []}},
    "Switch": {"extends": "Lamp"}
}"#;

#[test]
fn sibling_output_path() {
    assert_eq!(
        output_path_for(Path::new("project/parts.json")),
        Path::new("project/parts.d.lua")
    );
    assert_eq!(
        output_path_for(Path::new("my.parts.json")),
        Path::new("my.parts.d.lua")
    );
    assert_eq!(output_path_for(Path::new("parts")), Path::new("parts.d.lua"));
}

#[test]
fn render_prefixes_pragma() {
    let output = render(&parts(PARTS), &Config::default()).unwrap();

    insta::assert_snapshot!(output, @r#"
    --!nocheck
    type Lamp = {
        On: boolean,
        Connect: ((self: Lamp, event: "Ready", callback: () -> ()) -> EventConnection)
    }
    type Switch = {
        On: boolean,
        Connect: ((self: Switch, event: "Ready", callback: () -> ()) -> EventConnection)
    }
    "#);
}

#[test]
fn render_does_not_need_a_default_part() {
    let output = render(&parts(PARTS), &Config::default()).unwrap();
    assert!(!output.contains("GetPartFromPort"));
}

#[test]
fn render_with_custom_pragma() {
    let config = Config::new().pragma("--!strict");
    let output = render(&parts(PARTS), &config).unwrap();
    assert!(output.starts_with("--!strict\ntype Lamp = {"));
}

#[test]
fn generate_file_writes_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("parts.json");
    fs::write(&input, PARTS).unwrap();

    let written = generate_file(&input, None, &Config::default()).unwrap();

    assert_eq!(written, dir.path().join("parts.d.lua"));
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("--!nocheck\ntype Lamp = {\n"));
    assert!(content.ends_with('}'));
}

#[test]
fn generate_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("parts.json");

    let err = generate_file(&input, None, &Config::default()).unwrap_err();

    assert!(matches!(err, Error::MissingFile { ref path } if *path == input));
    assert_eq!(
        err.to_string(),
        format!("file not found: {}", input.display())
    );
    assert!(!dir.path().join("parts.d.lua").exists());
}

#[test]
fn generate_file_malformed_argument_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("parts.json");
    let json = r#"{"Fan": {"methods": {"Spin": {"arguments": [{"a": "number", "b": "string"}]}}, "events": {"Ready": []}}}"#;
    fs::write(&input, json).unwrap();

    let err = generate_file(&input, None, &Config::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::Part(PartError::MalformedArgument { found: 2, .. })
    ));
    assert!(!dir.path().join("parts.d.lua").exists());
}
