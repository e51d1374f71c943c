//! Command-line interface of the reference host.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cptg")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Define content types and replay their registrations")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON). Defaults apply without one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit one definition, as the settings form would
    Add {
        /// Type key, normalized to lowercase `[a-z0-9_-]`
        type_key: String,
        singular: String,
        plural: String,
    },
    /// List stored definitions in insertion order
    List {},
    /// Replay stored definitions and show the generated registrations
    Replay {
        /// Print registrations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the settings form descriptor as JSON
    Form {},
}
