//! Tests for `secretbridge hydrate`.

use crate::support::*;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_hydrate_envelope_file() {
    let t = Test::new();
    let path = t.payload("envelope.json", SECRET_ENVELOPE);

    let output = t.hydrate(&path, "envelope");
    assert_success(&output);
    assert_eq!(
        stdout_json(&output),
        json!({
            "success": true,
            "error": "",
            "result": {"arn": "arn:aws:secretsmanager:1", "name": "db", "secret": "p@ss"}
        })
    );
}

#[test]
fn test_hydrate_failed_envelope_defaults_result() {
    let t = Test::new();
    let path = t.payload("failed.json", FAILED_ENVELOPE);

    let output = t.hydrate(&path, "envelope");
    assert_success(&output);
    assert_eq!(
        stdout_json(&output),
        json!({
            "success": false,
            "error": "not found",
            "result": {"arn": "", "name": "", "secret": ""}
        })
    );
}

#[test]
fn test_hydrate_envelope_list_keeps_order() {
    let t = Test::new();
    let path = t.payload("list.json", LIST_ENVELOPE);

    let output = t.hydrate(&path, "envelope-list");
    assert_success(&output);

    let value = stdout_json(&output);
    let names: Vec<&str> = value["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_hydrate_preferences_from_stdin() {
    let t = Test::new();

    let output = t.hydrate_stdin(PREFERENCES, "preferences");
    assert_success(&output);
    assert_eq!(
        stdout_json(&output)["general"]["lastOpenedSecret"],
        "arn:aws:secretsmanager:1"
    );
}

#[test]
fn test_hydrate_double_encoded_payload() {
    let t = Test::new();
    let encoded = serde_json::to_string(SECRET_ENVELOPE).unwrap();
    let path = t.payload("encoded.json", &encoded);

    let output = t.hydrate(&path, "envelope");
    assert_success(&output);
    assert_eq!(stdout_json(&output)["result"]["name"], "db");
}

#[test]
fn test_hydrate_secret_map() {
    let t = Test::new();
    let path = t.payload(
        "map.json",
        r#"{"prod": {"name": "db-prod"}, "dev": {"name": "db-dev"}}"#,
    );

    let output = t.hydrate(&path, "secret-map");
    assert_success(&output);

    let value = stdout_json(&output);
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["prod", "dev"]);
    assert_eq!(value["dev"]["secret"], "");
}

#[test]
fn test_hydrate_garbage_is_lenient() {
    let t = Test::new();
    let path = t.payload("garbage.txt", "this is not json");

    let output = t.hydrate(&path, "secret");
    assert_success(&output);
    assert_eq!(
        stdout_json(&output),
        json!({"arn": "", "name": "", "secret": ""})
    );
}

#[test]
fn test_hydrate_strict_missing_field_fails() {
    let t = Test::new();
    let path = t.payload("partial.json", r#"{"arn": "a", "name": "n"}"#);

    t.cmd()
        .args(["hydrate", path.as_str(), "--shape", "secret", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing field `secret`"))
        .stderr(predicate::str::contains("--strict"));
}

#[test]
fn test_hydrate_strict_accepts_complete_payload() {
    let t = Test::new();
    let path = t.payload("envelope.json", SECRET_ENVELOPE);

    let output = t.hydrate_strict(&path, "envelope");
    assert_success(&output);
}
