use crate::handlers::render_groups;
use crate::models::args::SizingArgs;
use crate::models::session::Session;
use crate::services::{input, roster};
use anyhow::{Context, Result};
use classkit::grouping::make_breakout_groups;
use std::path::Path;
use tracing::info;

/// Shuffles the roster into breakout groups.
///
/// # Errors
/// Returns an error if the roster cannot be read or the sizing is invalid.
pub fn make_groups(session: &Session, path: &Path, sizing: SizingArgs) -> Result<String> {
    let names = roster::parse_names(&input::read_roster(path)?);
    let groups = make_breakout_groups(&names, sizing.into(), session.seed)
        .context("Cannot create breakout groups")?;

    info!(students = names.len(), groups = groups.len(), "Created breakout groups");
    Ok(render_groups(&groups, session.format))
}
