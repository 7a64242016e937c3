//! secretbridge - typed boundary layer for a secrets editor backend.
//!
//! Backend commands answer with untyped JSON (sometimes double-encoded as a
//! JSON string). This crate rebuilds those payloads into typed records
//! wrapped in a `{success, error, result}` envelope, so callers never
//! inspect raw payload shape.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── hydrate       # Hydrate a payload file into a shape
//! │   ├── prefs         # Show/get/set preferences
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── payload       # RawPayload (text or structured)
//!     ├── hydrate       # Hydrate trait and Hydrator
//!     ├── domain/       # Secret, Preferences, Envelope, EnvelopeList
//!     ├── preferences   # config.json store
//!     └── transport/    # Transport trait, Client, in-memory backend
//! ```
//!
//! # Example
//!
//! ```
//! use secretbridge::{RawPayload, SecretResult};
//!
//! let raw = RawPayload::from(r#"{"success":false,"error":"not found"}"#);
//! let env = SecretResult::from(raw);
//!
//! assert!(!env.success);
//! assert_eq!(env.error, "not found");
//! assert_eq!(env.result.arn, "");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{
    Envelope, EnvelopeList, Preferences, PreferencesGeneral, PreferencesProvider, Secret,
    SecretResult, SecretResultList,
};
pub use crate::core::hydrate::{hydrate, hydrate_list, hydrate_map, Fields, Hydrate, Hydrator, Mode};
pub use crate::core::payload::RawPayload;
pub use crate::core::preferences::PreferencesStore;
pub use crate::core::transport::{Call, Client, Memory, Transport};
pub use crate::error::{Error, HydrationError, PreferencesError, Result, TransportError};
