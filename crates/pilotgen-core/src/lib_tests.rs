use indoc::indoc;

use crate::{Colors, RawPart, parse_parts};

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "Microcontroller": {
            "default": true,
            "methods": {
                "Configure": {},
                "GetPort": {
                    "returns": "Port",
                    "arguments": [{"index": "number"}]
                }
            },
            "properties": {
                "ClassName": "string",
                "Code": "string"
            },
            "events": {
                "Loop": [],
                "Triggered": [{"port": "Port"}, {"value": "any"}]
            }
        },
        "Screen": {
            "extends": "Microcontroller",
            "properties": {
                "Width": "number"
            }
        }
    }
"#};

#[test]
fn parse_preserves_part_order() {
    let parts = parse_parts(SAMPLE_JSON).unwrap();
    let names: Vec<_> = parts.keys().map(String::as_str).collect();
    assert_eq!(names, ["Microcontroller", "Screen"]);
}

#[test]
fn parse_full_descriptor() {
    let parts = parse_parts(SAMPLE_JSON).unwrap();
    let mc = &parts["Microcontroller"];

    assert!(mc.default);
    assert_eq!(mc.extends, None);

    let methods: Vec<_> = mc.methods.keys().map(String::as_str).collect();
    assert_eq!(methods, ["Configure", "GetPort"]);

    let get_port = &mc.methods["GetPort"];
    assert_eq!(get_port.returns.as_deref(), Some("Port"));
    assert_eq!(get_port.arguments.len(), 1);
    assert_eq!(get_port.arguments[0]["index"], "number");

    let triggered = &mc.events["Triggered"];
    let keys: Vec<_> = triggered.iter().flat_map(|e| e.keys()).collect();
    assert_eq!(keys, ["port", "value"]);
}

#[test]
fn parse_missing_fields_default_to_empty() {
    let parts = parse_parts(SAMPLE_JSON).unwrap();
    let screen = &parts["Screen"];

    assert_eq!(screen.extends.as_deref(), Some("Microcontroller"));
    assert!(!screen.default);
    assert!(screen.methods.is_empty());
    assert!(screen.events.is_empty());
    assert_eq!(screen.properties["Width"], "number");

    let configure = &parts["Microcontroller"].methods["Configure"];
    assert_eq!(configure.returns, None);
    assert!(configure.arguments.is_empty());
}

#[test]
fn parse_null_default_is_false() {
    let json = r#"{"Lamp": {"default": null}, "Switch": {"default": true}}"#;
    let parts = parse_parts(json).unwrap();

    assert!(!parts["Lamp"].default);
    assert!(parts["Switch"].default);
}

#[test]
fn parse_keeps_malformed_entries_for_later_validation() {
    let json = r#"{"Fan": {"events": {"Spin": [{"a": "number", "b": "string"}]}}}"#;
    let parts = parse_parts(json).unwrap();
    assert_eq!(parts["Fan"].events["Spin"][0].len(), 2);
}

#[test]
fn parse_ignores_unknown_fields() {
    let json = r#"{"Fan": {"description": "spins", "events": {"Spin": []}}}"#;
    let parts = parse_parts(json).unwrap();
    assert_eq!(
        parts["Fan"],
        RawPart {
            events: [("Spin".to_string(), vec![])].into_iter().collect(),
            ..RawPart::default()
        }
    );
}

#[test]
fn parse_rejects_non_object_root() {
    let err = parse_parts("[]").unwrap_err();
    assert!(err.is_data());
}

#[test]
fn parse_reports_syntax_position() {
    let err = parse_parts("{\n  \"Fan\": {\n").unwrap_err();
    assert!(err.is_eof());
    assert!(err.line() > 1);
}

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::default(), Colors::OFF);
}
