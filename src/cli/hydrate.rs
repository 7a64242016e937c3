//! `hydrate` command.
//!
//! Reads a payload from a file or stdin and prints it rebuilt into the
//! requested shape as pretty JSON.

use std::io::Read;

use serde_json::Value;
use tracing::info;

use crate::cli::Shape;
use crate::core::domain::{Preferences, Secret, SecretResult, SecretResultList};
use crate::core::hydrate::Hydrator;
use crate::core::payload::RawPayload;
use crate::error::Result;

/// Hydrate `input` (a path, or `-` for stdin) into `shape`.
pub fn execute(input: &str, shape: Shape, strict: bool) -> Result<()> {
    info!(input, ?shape, strict, "hydrating payload");
    let text = read_input(input)?;
    let value = run(RawPayload::Text(text), shape, strict)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Hydrate a payload and re-encode the typed result.
pub fn run(raw: RawPayload, shape: Shape, strict: bool) -> Result<Value> {
    let hydrator = if strict {
        Hydrator::strict()
    } else {
        Hydrator::lenient()
    };

    let value = match shape {
        Shape::Secret => serde_json::to_value(hydrator.record::<Secret>(raw)?)?,
        Shape::Preferences => serde_json::to_value(hydrator.record::<Preferences>(raw)?)?,
        Shape::Envelope => serde_json::to_value(hydrator.record::<SecretResult>(raw)?)?,
        Shape::EnvelopeList => serde_json::to_value(hydrator.record::<SecretResultList>(raw)?)?,
        Shape::SecretList => serde_json::to_value(hydrator.list::<Secret>(raw)?)?,
        Shape::SecretMap => serde_json::to_value(hydrator.map::<Secret>(raw)?)?,
    };
    Ok(value)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
