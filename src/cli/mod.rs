//! Command-line interface.

pub mod hydrate;
pub mod output;
pub mod prefs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// secretbridge - hydrate secrets-editor payloads into typed envelopes.
#[derive(Parser)]
#[command(
    name = "secretbridge",
    about = "Hydrate secrets-editor backend payloads into typed envelopes",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true, env = crate::core::constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Hydrate a JSON payload into a typed shape and print it
    Hydrate {
        /// Payload file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Target shape
        #[arg(short, long, value_enum, default_value_t = Shape::Envelope)]
        shape: Shape,
        /// Fail on missing fields and type mismatches instead of defaulting
        #[arg(long)]
        strict: bool,
    },

    /// Manage local preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// Shapes a payload can be hydrated into.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A single secret record
    Secret,
    /// The preferences document
    Preferences,
    /// `{success, error, result: Secret}`
    Envelope,
    /// `{success, error, result: [Secret]}`
    EnvelopeList,
    /// A bare array of secrets
    SecretList,
    /// An object of secrets keyed by name, keys kept in order
    SecretMap,
}

/// Preferences subcommands.
#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show all preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one preference
    Get {
        /// Dotted path, e.g. general.lastOpenedSecret
        path: String,
    },

    /// Set one preference
    Set {
        /// Dotted path, e.g. general.lastOpenedSecret
        path: String,
        /// New value
        value: String,
    },
}

/// Execute a command.
pub fn execute(command: Command, config: Option<PathBuf>) -> crate::error::Result<()> {
    let config = config.as_deref();

    match command {
        Command::Hydrate {
            input,
            shape,
            strict,
        } => hydrate::execute(&input, shape, strict),
        Command::Prefs { action } => match action {
            PrefsAction::Show { json } => prefs::show(config, json),
            PrefsAction::Get { path } => prefs::get(config, &path),
            PrefsAction::Set { path, value } => prefs::set(config, &path, &value),
        },
    }
}
