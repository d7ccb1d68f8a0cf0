use crate::logging::directives;

#[test]
fn verbosity_overrides_environment() {
    assert_eq!(directives(1, Some("trace".to_string())), "info");
    assert_eq!(directives(2, None), "debug");
    assert_eq!(directives(5, None), "debug");
}

#[test]
fn environment_used_without_flags() {
    assert_eq!(directives(0, Some("pilotgen=debug".to_string())), "pilotgen=debug");
    assert_eq!(directives(0, None), "warn");
}
