//! In-memory backend.
//!
//! Answers calls the way the secrets-editor backend does, without any
//! cloud provider behind it. Useful offline and in tests.

use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use super::{Call, Transport};
use crate::core::domain::{Preferences, Secret, SecretResult, SecretResultList};
use crate::core::payload::RawPayload;
use crate::error::TransportError;

/// ARN prefix given to secrets created in memory.
const ARN_PREFIX: &str = "arn:aws:secretsmanager:local:000000000000:secret:";

#[derive(Default)]
struct State {
    secrets: Vec<Secret>,
    preferences: Preferences,
}

/// In-memory transport.
#[derive(Default)]
pub struct Memory {
    state: Mutex<State>,
    double_encoded: bool,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with `(name, value)` pairs, in order.
    pub fn with_secrets<'a>(secrets: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let secrets = secrets
            .into_iter()
            .map(|(name, value)| Secret::new(arn_for(name), name, value))
            .collect();
        Self {
            state: Mutex::new(State {
                secrets,
                preferences: Preferences::default(),
            }),
            double_encoded: false,
        }
    }

    /// Seed the preferences document.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .preferences = preferences;
        self
    }

    /// Answer with JSON text instead of structured payloads.
    pub fn double_encoded(mut self) -> Self {
        self.double_encoded = true;
        self
    }

    fn encode<S: Serialize>(&self, body: &S) -> Result<RawPayload, TransportError> {
        let encoded = if self.double_encoded {
            serde_json::to_string(body).map(RawPayload::Text)
        } else {
            serde_json::to_value(body).map(RawPayload::Structured)
        };
        encoded.map_err(|e| TransportError::Rejected(format!("encoding response: {e}")))
    }
}

/// ARN assigned to a secret name.
pub fn arn_for(name: &str) -> String {
    format!("{}{}", ARN_PREFIX, name)
}

impl Transport for Memory {
    fn invoke(&self, call: &Call) -> Result<RawPayload, TransportError> {
        debug!(method = call.method(), "memory backend call");
        let mut state = self
            .state
            .lock()
            .map_err(|_| TransportError::Unavailable("memory backend poisoned".to_string()))?;

        match call {
            Call::GetSecrets => {
                let listed = state
                    .secrets
                    .iter()
                    .map(|s| Secret::new(&s.arn, &s.name, ""))
                    .collect();
                self.encode(&SecretResultList::ok(listed))
            }
            Call::CreateSecret { name, secret } => {
                if state.secrets.iter().any(|s| &s.name == name) {
                    return self.encode(&SecretResult::failure(format!(
                        "secret already exists: {}",
                        name
                    )));
                }
                let arn = arn_for(name);
                state.secrets.push(Secret::new(&arn, name, secret));
                self.encode(&SecretResult::ok(Secret::new(arn, name, "")))
            }
            Call::LoadSecret { arn } => match state.secrets.iter().find(|s| &s.arn == arn) {
                Some(found) => self.encode(&SecretResult::ok(found.clone())),
                None => self.encode(&SecretResult::failure(format!("secret not found: {}", arn))),
            },
            Call::SaveSecret { arn, secret } => {
                match state.secrets.iter_mut().find(|s| &s.arn == arn) {
                    Some(found) => {
                        found.secret = secret.clone();
                        let saved = Secret::new(&found.arn, &found.name, "");
                        self.encode(&SecretResult::ok(saved))
                    }
                    None => {
                        self.encode(&SecretResult::failure(format!("secret not found: {}", arn)))
                    }
                }
            }
            Call::GetPreferences => self.encode(&state.preferences),
            Call::SetPreference { path, value } => {
                state
                    .preferences
                    .set(path, value)
                    .map_err(|e| TransportError::Rejected(e.to_string()))?;
                Ok(RawPayload::Structured(serde_json::Value::Null))
            }
        }
    }
}
