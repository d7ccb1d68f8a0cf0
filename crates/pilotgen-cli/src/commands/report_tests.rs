use std::io;
use std::path::PathBuf;

use pilotgen::{Error, PartError};
use pilotgen_core::{Colors, parse_parts};

use super::report::render_error;

#[test]
fn missing_file_is_reported_plainly() {
    let err = Error::MissingFile {
        path: PathBuf::from("game/parts.json"),
    };

    assert_eq!(
        render_error(&err, Colors::OFF),
        "error: file not found: game/parts.json\n"
    );
}

#[test]
fn json_error_includes_parser_detail() {
    let source = parse_parts("{").unwrap_err();
    let err = Error::Json {
        path: PathBuf::from("parts.json"),
        source,
    };

    let out = render_error(&err, Colors::OFF);
    assert!(out.starts_with("error: unable to parse JSON in 'parts.json': "));
    assert!(out.contains("line 1"));
    assert!(!out.contains("caused by"));
}

#[test]
fn part_error_is_a_generation_failure() {
    let err = Error::from(PartError::EmptyEvents {
        part: "Rock".to_string(),
    });

    assert_eq!(
        render_error(&err, Colors::OFF),
        "error: failed to generate: part `Rock` has no events\n"
    );
}

#[test]
fn io_error_lists_cause() {
    let err = Error::Write {
        path: PathBuf::from("build/pilot.d.lua"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"),
    };

    assert_eq!(
        render_error(&err, Colors::OFF),
        "error: failed to generate: failed to write 'build/pilot.d.lua'\n  caused by: read-only filesystem\n"
    );
}

#[test]
fn colored_label() {
    let err = Error::NoDefaultPart;
    let out = render_error(&err, Colors::ON);

    assert!(out.starts_with("\x1b[1;31merror\x1b[0m: failed to generate: "));
}
