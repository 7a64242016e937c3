//! Core library components.
//!
//! Payload hydration, the domain records built on it, the preferences
//! store and the backend transport seam.

pub mod constants;
pub mod domain;
pub mod hydrate;
pub mod payload;
pub mod preferences;
pub mod transport;
