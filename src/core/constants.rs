//! Constants used throughout secretbridge.
//!
//! Centralizes file names and environment variable names.

/// Application directory under the user config dir.
pub const APP_DIR: &str = "secret-editor";

/// Preferences file name inside [`APP_DIR`].
pub const PREFERENCES_FILE: &str = "config.json";

/// Environment variable overriding the preferences file path.
pub const CONFIG_ENV: &str = "SECRETBRIDGE_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SECRETBRIDGE_LOG";

/// Provider name of the AWS Secrets Manager backend.
pub const PROVIDER_AWS: &str = "AWS";
