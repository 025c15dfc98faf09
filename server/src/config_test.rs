use super::*;

// Env-var mutation is process-global, so each test uses its own key via
// parse_var rather than the Config loader.

#[test]
fn parse_var_returns_default_when_unset() {
    let value: u16 = parse_var("STENCIL_TEST_UNSET_PORT", 8000).unwrap();
    assert_eq!(value, 8000);
}

#[test]
fn parse_var_parses_present_value() {
    unsafe { std::env::set_var("STENCIL_TEST_PORT", "9001") };
    let value: u16 = parse_var("STENCIL_TEST_PORT", 8000).unwrap();
    assert_eq!(value, 9001);
    unsafe { std::env::remove_var("STENCIL_TEST_PORT") };
}

#[test]
fn parse_var_rejects_garbage() {
    unsafe { std::env::set_var("STENCIL_TEST_BAD_PORT", "not-a-port") };
    let result: Result<u16, _> = parse_var("STENCIL_TEST_BAD_PORT", 8000);
    assert!(result.is_err());
    unsafe { std::env::remove_var("STENCIL_TEST_BAD_PORT") };
}

#[test]
fn parse_var_trims_whitespace() {
    unsafe { std::env::set_var("STENCIL_TEST_WS_PORT", " 8080 ") };
    let value: u16 = parse_var("STENCIL_TEST_WS_PORT", 8000).unwrap();
    assert_eq!(value, 8080);
    unsafe { std::env::remove_var("STENCIL_TEST_WS_PORT") };
}
