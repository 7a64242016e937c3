//! Error output tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_invalid_key_path_shows_hint() {
    let t = Test::new();

    t.cmd()
        .args(["prefs", "set", "general.nope", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key path(general.nope)"))
        .stderr(predicate::str::contains("valid paths:"));
}

#[test]
fn test_get_unknown_path_fails() {
    let t = Test::new();

    let output = t.prefs_get("provider");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key path(provider)");
}

#[test]
fn test_missing_input_file() {
    let t = Test::new();

    let output = t.hydrate("does-not-exist.json", "secret");
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_malformed_preferences_file() {
    let t = Test::new();
    std::fs::create_dir_all(t.config_path().parent().unwrap()).unwrap();
    std::fs::write(t.config_path(), "{ broken").unwrap();

    let output = t.prefs_show();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse preferences");
}

#[test]
fn test_unknown_shape_rejected() {
    let t = Test::new();
    let path = t.payload("x.json", "{}");

    t.cmd()
        .args(["hydrate", path.as_str(), "--shape", "widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'widget'"));
}
