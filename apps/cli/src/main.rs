use anyhow::Context;
use clap::Parser;
use cptg::domain::config::LoggingConfig;
use cptg_cli::{Cli, load, run};
use cptg_logger::{LevelFilter, Logger};
use std::process::ExitCode;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    let _log = init_logging(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), data_dir = %config.storage.data_dir.display(), "cptg started");

    let outcome = run(&cli, config, &mut std::io::stdout().lock())?;
    Ok(outcome.into())
}

fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Unknown log level '{}'", cfg.level))?;
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &cfg.directory {
        Some(dir) => builder.path(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
