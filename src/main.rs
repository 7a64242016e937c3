//! secretbridge - hydrate secrets-editor payloads into typed envelopes.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretbridge::cli::output;
use secretbridge::cli::{execute, Cli};
use secretbridge::core::constants;
use secretbridge::core::domain::KEY_PATHS;
use secretbridge::error::{Error, PreferencesError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretbridge=debug")
        } else {
            EnvFilter::new("secretbridge=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Preferences(PreferencesError::InvalidKeyPath(_)) => {
                Some(format!("valid paths: {}", KEY_PATHS.join(", ")))
            }
            Error::Preferences(PreferencesError::NoConfigDir) => {
                Some(format!("pass --config or set {}", constants::CONFIG_ENV))
            }
            Error::Hydration(_) => Some("drop --strict to fall back to defaults".to_string()),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
