//! Preferences type.
//!
//! The client-side settings document persisted by the preferences store.

use serde::Serialize;

use crate::core::hydrate::{Fields, Hydrate};
use crate::error::{HydrationError, PreferencesError};

/// Dotted paths accepted by [`Preferences::get`] and [`Preferences::set`].
pub const KEY_PATHS: &[&str] = &[
    "general.lastOpenedSecret",
    "provider.current",
    "provider.awsProfile",
];

/// All client preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub general: PreferencesGeneral,
    pub provider: PreferencesProvider,
}

/// General editor settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesGeneral {
    /// ARN of the secret that was open when the editor last closed
    pub last_opened_secret: String,
}

/// Secrets provider selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesProvider {
    /// Provider name, e.g. `AWS`
    pub current: String,
    /// Shared config profile used by the AWS provider
    pub aws_profile: String,
}

impl Preferences {
    /// Read a preference by dotted path.
    pub fn get(&self, path: &str) -> Option<&str> {
        let value = match path {
            "general.lastOpenedSecret" => &self.general.last_opened_secret,
            "provider.current" => &self.provider.current,
            "provider.awsProfile" => &self.provider.aws_profile,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Update a preference by dotted path.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidKeyPath` if `path` does not name a
    /// preference.
    pub fn set(&mut self, path: &str, value: &str) -> Result<(), PreferencesError> {
        let slot = match path {
            "general.lastOpenedSecret" => &mut self.general.last_opened_secret,
            "provider.current" => &mut self.provider.current,
            "provider.awsProfile" => &mut self.provider.aws_profile,
            _ => return Err(PreferencesError::InvalidKeyPath(path.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }
}

impl Hydrate for Preferences {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            general: fields.record("general")?,
            provider: fields.record("provider")?,
        })
    }
}

impl Hydrate for PreferencesGeneral {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            last_opened_secret: fields.text("lastOpenedSecret")?,
        })
    }
}

impl Hydrate for PreferencesProvider {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            current: fields.text("current")?,
            aws_profile: fields.text("awsProfile")?,
        })
    }
}
