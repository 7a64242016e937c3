//! Backend command invocation.
//!
//! A [`Transport`] carries a [`Call`] to the backend and returns whatever
//! untyped payload came back. [`Client`] sits on top and turns every
//! response into an envelope, so callers only ever look at `success`,
//! `error` and a typed `result`.
//!
//! ## Adding a New Transport
//!
//! 1. Implement the `Transport` trait
//! 2. Add the implementation in a new file (e.g., `ipc.rs`, `http.rs`)
//! 3. Re-export from this module

use tracing::{debug, warn};

use crate::core::domain::{Preferences, SecretResult, SecretResultList};
use crate::core::hydrate::hydrate;
use crate::core::payload::RawPayload;
use crate::error::{Error, Result, TransportError};

mod memory;

pub use memory::{arn_for, Memory};

/// A backend command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// List secrets (values omitted)
    GetSecrets,
    /// Create a secret
    CreateSecret { name: String, secret: String },
    /// Load one secret including its value
    LoadSecret { arn: String },
    /// Replace the value of a secret
    SaveSecret { arn: String, secret: String },
    /// Fetch the preferences document
    GetPreferences,
    /// Set one preference by dotted path
    SetPreference { path: String, value: String },
}

impl Call {
    /// Backend method name.
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetSecrets => "GetSecrets",
            Self::CreateSecret { .. } => "CreateSecret",
            Self::LoadSecret { .. } => "LoadSecret",
            Self::SaveSecret { .. } => "SaveSecret",
            Self::GetPreferences => "GetPreferences",
            Self::SetPreference { .. } => "SetPreference",
        }
    }
}

/// Carries calls to the backend.
pub trait Transport {
    /// Invoke a backend command.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the call could not be delivered or the
    /// backend rejected it outright. Business failures travel inside the
    /// returned payload instead.
    fn invoke(&self, call: &Call) -> std::result::Result<RawPayload, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn invoke(&self, call: &Call) -> std::result::Result<RawPayload, TransportError> {
        (**self).invoke(call)
    }
}

/// Typed client over a [`Transport`].
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List all secrets, in backend order.
    pub fn list_secrets(&self) -> SecretResultList {
        match self.send(&Call::GetSecrets) {
            Ok(raw) => raw.into(),
            Err(e) => SecretResultList::failure(e),
        }
    }

    /// Create a secret.
    pub fn create_secret(&self, name: &str, secret: &str) -> SecretResult {
        self.single(&Call::CreateSecret {
            name: name.to_string(),
            secret: secret.to_string(),
        })
    }

    /// Load a secret with its value.
    pub fn load_secret(&self, arn: &str) -> SecretResult {
        self.single(&Call::LoadSecret {
            arn: arn.to_string(),
        })
    }

    /// Replace a secret's value.
    pub fn save_secret(&self, arn: &str, secret: &str) -> SecretResult {
        self.single(&Call::SaveSecret {
            arn: arn.to_string(),
            secret: secret.to_string(),
        })
    }

    /// Fetch preferences, falling back to defaults if the call fails.
    pub fn preferences(&self) -> Preferences {
        match self.send(&Call::GetPreferences) {
            Ok(raw) => hydrate(raw),
            Err(_) => Preferences::default(),
        }
    }

    /// Set one preference by dotted path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the backend rejects the path or is
    /// unreachable.
    pub fn set_preference(&self, path: &str, value: &str) -> Result<()> {
        self.send(&Call::SetPreference {
            path: path.to_string(),
            value: value.to_string(),
        })
        .map(|_| ())
        .map_err(Error::from)
    }

    fn single(&self, call: &Call) -> SecretResult {
        match self.send(call) {
            Ok(raw) => raw.into(),
            Err(e) => SecretResult::failure(e),
        }
    }

    fn send(&self, call: &Call) -> std::result::Result<RawPayload, TransportError> {
        debug!(method = call.method(), "invoking backend");
        self.transport.invoke(call).map_err(|e| {
            warn!(method = call.method(), error = %e, "backend call failed");
            e
        })
    }
}
