//! Domain types.

mod envelope;
mod preferences;
mod secret;

pub use envelope::{Envelope, EnvelopeList, SecretResult, SecretResultList};
pub use preferences::{Preferences, PreferencesGeneral, PreferencesProvider, KEY_PATHS};
pub use secret::Secret;
