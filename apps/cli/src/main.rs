#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{breakout, cold_call, peer_review, project_groups};
use crate::models::args::{Cli, Commands};
use crate::models::session::Session;

use anyhow::{Context, Result};
use clap::Parser;
use classkit::domain::config::{ClassroomConfig, LoggingConfig};
use classkit::kernel::config::load_config;
use classkit_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ClassroomConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _logger = init_logger(&config.logging, cli.verbose)?;

    let session = Session::new(config, cli.format, cli.seed);
    let output = match &cli.command {
        Commands::Breakout { roster, sizing } => breakout::make_groups(&session, roster, *sizing)?,
        Commands::ColdCall { roster, sample_size, include_excused } => {
            cold_call::pick(&session, roster, *sample_size, *include_excused)?
        },
        Commands::PeerReview { roster } => peer_review::match_reviews(&session, roster)?,
        Commands::ProjectGroups { roster, sizing, delimiters } => {
            project_groups::make_groups(&session, roster, *sizing, delimiters.as_deref())?
        },
    };

    print!("{output}");
    Ok(())
}

/// `-v` flags win over the configured level.
fn init_logger(logging: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let level = match verbose {
        0 => logging
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", logging.level))?,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    let logger = match &logging.directory {
        Some(directory) if logging.json => builder.path(directory).json().init()?,
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
