//! Secret type.
//!
//! A secret as returned by the backend: its ARN, display name and value.

use serde::Serialize;
use zeroize::Zeroize;

use crate::core::hydrate::{Fields, Hydrate};
use crate::error::HydrationError;

/// A stored secret.
///
/// List responses leave `secret` empty; only single-secret loads carry the
/// value. The value is wiped from memory on drop.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Secret {
    pub arn: String,
    pub name: String,
    pub secret: String,
}

impl Secret {
    /// Create a secret from its three fields
    pub fn new(arn: impl Into<String>, name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            name: name.into(),
            secret: secret.into(),
        }
    }

    /// Whether the secret value was included in the payload
    pub fn has_value(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl Hydrate for Secret {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            arn: fields.text("arn")?,
            name: fields.text("name")?,
            secret: fields.text("secret")?,
        })
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("secret", &"[redacted]")
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
