//! Test fixtures and constants.

/// A complete single-secret envelope.
pub const SECRET_ENVELOPE: &str = r#"{
  "success": true,
  "error": "",
  "result": {"arn": "arn:aws:secretsmanager:1", "name": "db", "secret": "p@ss"}
}"#;

/// A failed envelope without a result.
pub const FAILED_ENVELOPE: &str = r#"{"success": false, "error": "not found"}"#;

/// A list envelope with three secrets, values omitted.
pub const LIST_ENVELOPE: &str = r#"{
  "success": true,
  "error": "",
  "result": [
    {"arn": "arn:aws:secretsmanager:3", "name": "zeta"},
    {"arn": "arn:aws:secretsmanager:1", "name": "alpha"},
    {"arn": "arn:aws:secretsmanager:2", "name": "mid"}
  ]
}"#;

/// A preferences document.
pub const PREFERENCES: &str = r#"{
  "general": {"lastOpenedSecret": "arn:aws:secretsmanager:1"},
  "provider": {"current": "AWS", "awsProfile": "dev"}
}"#;
