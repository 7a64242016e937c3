//! `prefs` commands.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::KEY_PATHS;
use crate::core::preferences::PreferencesStore;
use crate::error::{PreferencesError, Result};

fn open(config: Option<&Path>) -> Result<PreferencesStore> {
    match config {
        Some(path) => PreferencesStore::open(path),
        None => PreferencesStore::open_default(),
    }
}

/// Print all preferences.
pub fn show(config: Option<&Path>, json: bool) -> Result<()> {
    let store = open(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.preferences())?);
        return Ok(());
    }

    output::header("Preferences");
    for path in KEY_PATHS {
        let value = store.preferences().get(path).unwrap_or_default();
        if value.is_empty() {
            output::kv(path, "-");
        } else {
            output::kv(path, value);
        }
    }
    output::dimmed(&format!("file: {}", store.path().display()));
    Ok(())
}

/// Print one preference value.
pub fn get(config: Option<&Path>, key: &str) -> Result<()> {
    let store = open(config)?;
    let value = store
        .preferences()
        .get(key)
        .ok_or_else(|| PreferencesError::InvalidKeyPath(key.to_string()))?;
    // Plain output for scripting
    println!("{}", value);
    Ok(())
}

/// Set one preference.
pub fn set(config: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let mut store = open(config)?;
    store.set(key, value)?;
    output::success(&format!("set {}", output::path(key)));
    Ok(())
}
