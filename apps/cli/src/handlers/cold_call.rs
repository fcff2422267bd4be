use crate::handlers::NO_ELIGIBLE;
use crate::models::args::OutputFormat;
use crate::models::session::Session;
use crate::services::{input, roster};
use anyhow::{Context, Result};
use classkit::grouping::{cold_call_candidates, export};
use std::path::Path;
use tracing::info;

/// Picks students to call on.
///
/// Flags override the configured sample size and opt-out policy.
///
/// # Errors
/// Returns an error if the roster cannot be read or the sample size is invalid.
pub fn pick(
    session: &Session,
    path: &Path,
    sample_size: Option<usize>,
    include_excused: Option<bool>,
) -> Result<String> {
    let roster = roster::parse_cold_call(&input::read_roster(path)?, &session.config.roster);

    let mut options = classkit::options::cold_call(&session.config)
        .sample_size(sample_size.unwrap_or(session.config.cold_call.sample_size))
        .include_excused(include_excused.unwrap_or(session.config.cold_call.include_excused));
    options.seed = session.seed;

    let picked = cold_call_candidates(&roster, &options).context("Cannot pick students")?;
    info!(picked = picked.len(), "Selected students for cold calling");

    Ok(match session.format {
        OutputFormat::Csv => export::names_csv(&picked),
        OutputFormat::Text if picked.is_empty() => format!("{NO_ELIGIBLE}\n"),
        OutputFormat::Text => picked.iter().map(|name| format!("{name}\n")).collect(),
    })
}
