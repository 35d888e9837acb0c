use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(temp.path(), "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_numeric_env_var_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("MIG_REQUEST_TIMEOUT_SECS", "not-a-number");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.destination.request_timeout_secs, eq(300));
}

#[test]
#[serial]
fn given_unknown_log_level_in_toml_when_load_then_defaults_to_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [logging]
            level = "chatty"
        "#,
    );
    let _level = EnvGuard::remove("MIG_LOG_LEVEL");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(*result.unwrap().logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_dir_name_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("MIG_MIGRATE_DIR_NAME", "../elsewhere");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("dir_name"));
}

#[test]
#[serial]
fn given_empty_role_hint_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [role_hints]
            "Reviewer" = ""
        "#,
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
