//! Preferences file management.
//!
//! Loads and saves the [`Preferences`] document as JSON under the user
//! config directory (`<config dir>/secret-editor/config.json`). The file is
//! created with defaults on first open.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Preferences;
use crate::core::hydrate::hydrate;
use crate::error::{PreferencesError, Result};

/// File-backed preferences.
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferencesStore {
    /// Default location of the preferences file.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::NoConfigDir` if the platform config
    /// directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(PreferencesError::NoConfigDir)?;
        Ok(dir
            .join(constants::APP_DIR)
            .join(constants::PREFERENCES_FILE))
    }

    /// Open the store at the default location.
    ///
    /// # Errors
    ///
    /// See [`PreferencesStore::open`].
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open the store at `path`, creating it with defaults if missing.
    ///
    /// Unknown keys in the file are ignored and missing keys take their
    /// default value.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Read`/`Write` on I/O failure and
    /// `PreferencesError::Parse` if the file is not valid JSON.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "opening preferences");

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(PreferencesError::Write)?;
            }
            let store = Self {
                path,
                preferences: Preferences::default(),
            };
            store.save()?;
            return Ok(store);
        }

        let contents = fs::read_to_string(&path).map_err(PreferencesError::Read)?;
        let value: Value = serde_json::from_str(&contents).map_err(PreferencesError::Parse)?;
        let preferences = hydrate(value);

        Ok(Self { path, preferences })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Set a preference by dotted path and persist the change.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidKeyPath` for an unknown path, or a
    /// write error if saving fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        debug!(key, "setting preference");
        self.preferences.set(key, value)?;
        self.save()
    }

    /// Write the preferences file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), "saving preferences");
        let contents =
            serde_json::to_string_pretty(&self.preferences).map_err(PreferencesError::Serialize)?;
        write_private(&self.path, contents.as_bytes()).map_err(PreferencesError::Write)?;
        Ok(())
    }
}

/// Write a file readable only by the owner (Unix).
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents)?;
        // mode() only applies on creation
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        Ok(())
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents)
    }
}
