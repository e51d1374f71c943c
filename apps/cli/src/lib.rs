//! # Content Type Generator CLI
//!
//! Reference host for the generator: the settings form becomes `add`, the
//! startup hook becomes `replay`.
//!
//! ```no_run
//! use clap::Parser;
//! use cptg_cli::{Cli, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["cptg", "add", "movie", "Movie", "Movies"]);
//!     let config = cptg_cli::load(&cli)?;
//!     run(&cli, config, &mut std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

mod args;

pub use crate::args::{Cli, Command};

use anyhow::{Context, Result};
use cptg::Generator;
use cptg::domain::CandidateDefinition;
use cptg::domain::config::AppConfig;
use cptg::domain::constants::messages;
use cptg::registry::{AppendOutcome, RegistrationCatalog};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

/// What a command ended with, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The submission was not stored.
    Rejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Rejected => Self::from(2_u8),
        }
    }
}

/// Loads the config named by `--config`, or the defaults.
///
/// # Errors
/// Fails if the file is missing or malformed.
pub fn load(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) => cptg::kernel::config::load_config(path)
            .with_context(|| format!("Configuration {} is malformed", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Runs one command, writing its output to `out`.
///
/// # Errors
/// Storage, document, and output failures.
pub fn run(cli: &Cli, config: AppConfig, out: &mut impl Write) -> Result<Outcome> {
    info!(command = ?cli.command, "Running command");
    let generator = Generator::builder().config(config).connect()?;

    match &cli.command {
        Command::Add { type_key, singular, plural } => {
            let candidate: CandidateDefinition = (type_key.as_str(), singular.as_str(), plural.as_str()).into();
            match generator.submit(&candidate)? {
                AppendOutcome::Stored(definition) => {
                    writeln!(out, "stored {}", definition.type_key)?;
                },
                AppendOutcome::Rejected(rejection) => {
                    writeln!(out, "rejected: {rejection}")?;
                    return Ok(Outcome::Rejected);
                },
            }
        },
        Command::List {} => {
            let definitions = generator.definitions()?;
            if definitions.is_empty() {
                writeln!(out, "{}", generator.localizer().lookup(messages::LISTING_EMPTY))?;
            }
            for definition in &definitions {
                let marker = if definition.is_complete() { "" } else { "  (incomplete)" };
                writeln!(
                    out,
                    "{}\t{}\t{}{marker}",
                    definition.type_key, definition.singular_label, definition.plural_label
                )?;
            }
        },
        Command::Replay { json } => {
            let mut catalog = RegistrationCatalog::new();
            let summary = generator.on_startup(&mut catalog)?;

            if *json {
                let generated: Vec<_> = catalog.generated().collect();
                serde_json::to_writer_pretty(&mut *out, &generated)?;
                writeln!(out)?;
            } else {
                let localizer = generator.localizer();
                writeln!(out, "{}", localizer.lookup(messages::LISTING_TITLE))?;
                let keys = catalog.generated_keys();
                if keys.is_empty() {
                    writeln!(out, "{}", localizer.lookup(messages::LISTING_EMPTY))?;
                }
                for key in keys {
                    writeln!(out, "- {key}")?;
                }
                writeln!(out, "skipped: {}", summary.skipped)?;
            }
        },
        Command::Form {} => {
            serde_json::to_writer_pretty(&mut *out, &generator.settings_form())?;
            writeln!(out)?;
        },
    }

    Ok(Outcome::Success)
}
