// Unit tests for config loading, validation, and env layering.

use crate::config::ClientConfig;

use serial_test::serial;

/// **VALUE**: Verifies the out-of-the-box config is usable.
///
/// **WHY THIS MATTERS**: First-run hosts construct the client straight from
/// `ClientConfig::default()`; an invalid default bricks the happy path.
///
/// **BUG THIS CATCHES**: Would catch a default value drifting out of its own
/// validation rules.
#[test]
fn given_default_config_when_validated_then_passes() {
    let config = ClientConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.login_path, "/api/auth/login");
    assert_eq!(config.login_route, "/user/login");
    assert_eq!(config.timeout_secs, 30);
}

/// **VALUE**: Verifies each validation rule rejects its bad input.
///
/// **BUG THIS CATCHES**: Would catch a rule being dropped during refactoring
/// (e.g. zero timeouts reaching the reqwest builder).
#[test]
fn given_invalid_values_when_validated_then_each_rule_rejects() {
    let mut bad_url = ClientConfig::default();
    bad_url.base_url = String::from("not a url");
    assert!(bad_url.validate().is_err(), "base_url must parse");

    let mut bad_timeout = ClientConfig::default();
    bad_timeout.timeout_secs = 0;
    assert!(bad_timeout.validate().is_err(), "timeout must be non-zero");

    let mut bad_path = ClientConfig::default();
    bad_path.login_path = String::from("api/auth/login");
    assert!(bad_path.validate().is_err(), "login_path must be absolute");

    let mut bad_route = ClientConfig::default();
    bad_route.login_route = String::from("user/login");
    assert!(bad_route.validate().is_err(), "login_route must be absolute");

    let mut bad_version = ClientConfig::default();
    bad_version.version = 0;
    assert!(bad_version.validate().is_err(), "version 0 is invalid");
}

/// **VALUE**: Verifies save/load round-trips through console.toml.
///
/// **WHY THIS MATTERS**: Hosts persist edited settings with `save` and read
/// them back on next launch; asymmetry between the two loses user settings.
///
/// **BUG THIS CATCHES**: Would catch serde field renames breaking the TOML
/// shape, or the atomic write leaving only the temp file behind.
#[test]
fn given_saved_config_when_loaded_then_values_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut config = ClientConfig::default();
    config.base_url = String::from("http://10.0.0.7:9000");
    config.timeout_secs = 5;
    config.save(dir.path()).expect("save");

    let loaded = ClientConfig::load(dir.path()).expect("load");

    assert_eq!(loaded.base_url, "http://10.0.0.7:9000");
    assert_eq!(loaded.timeout_secs, 5);
    assert_eq!(loaded.login_path, config.login_path);
}

/// **VALUE**: Verifies a missing config file yields defaults, not an error.
///
/// **BUG THIS CATCHES**: Would catch first-run behavior regressing into a
/// hard failure.
#[test]
fn given_missing_config_file_when_loaded_then_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    let loaded = ClientConfig::load(dir.path()).expect("load defaults");

    assert_eq!(loaded.base_url, ClientConfig::default().base_url);
}

/// **VALUE**: Verifies a corrupt config file is a loud error.
///
/// **WHY THIS MATTERS**: Silently falling back to defaults on a typo would
/// point every request at the wrong server with no explanation.
///
/// **BUG THIS CATCHES**: Would catch parse failures being swallowed.
#[test]
fn given_corrupt_config_file_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("console.toml"), "base_url = [broken").expect("fixture");

    assert!(ClientConfig::load(dir.path()).is_err());
}

/// **VALUE**: Verifies environment variables override file values.
///
/// **WHY THIS MATTERS**: Deployments point staging hosts at alternate
/// backends via CONSOLE_BASE_URL without touching the config file; the
/// documented precedence is environment over file.
///
/// **BUG THIS CATCHES**: Would catch the overlay running before the file load
/// or being skipped entirely.
#[test]
#[serial]
fn given_env_override_when_applied_then_wins_over_file_value() {
    // GIVEN: An env override (set_var is unsafe in edition 2024; this
    // test is serialized so no other thread reads the environment)
    unsafe { std::env::set_var("CONSOLE_BASE_URL", "http://staging.internal:8080") };

    // WHEN: Applying overrides onto defaults
    let mut config = ClientConfig::default();
    config.apply_env_overrides();

    unsafe { std::env::remove_var("CONSOLE_BASE_URL") };

    // THEN: The env value wins
    assert_eq!(config.base_url, "http://staging.internal:8080");
}

/// **VALUE**: Verifies an unparsable timeout override is ignored.
///
/// **BUG THIS CATCHES**: Would catch a bad CONSOLE_TIMEOUT_SECS value
/// panicking or zeroing the timeout.
#[test]
#[serial]
fn given_invalid_timeout_env_when_applied_then_file_value_kept() {
    unsafe { std::env::set_var("CONSOLE_TIMEOUT_SECS", "soon") };

    let mut config = ClientConfig::default();
    config.apply_env_overrides();

    unsafe { std::env::remove_var("CONSOLE_TIMEOUT_SECS") };

    assert_eq!(config.timeout_secs, 30, "invalid override must be ignored");
}
