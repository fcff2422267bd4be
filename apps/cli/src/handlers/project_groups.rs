use crate::handlers::render_groups;
use crate::models::args::SizingArgs;
use crate::models::session::Session;
use crate::services::{input, roster};
use anyhow::{Context, Result};
use classkit::grouping::{Delimiters, form_preference_groups};
use std::path::Path;
use tracing::info;

/// Groups students by shared interests.
///
/// `--delimiters` replaces the configured delimiter list.
///
/// # Errors
/// Returns an error if the roster cannot be read or the sizing is invalid.
pub fn make_groups(
    session: &Session,
    path: &Path,
    sizing: SizingArgs,
    delimiters: Option<&str>,
) -> Result<String> {
    let roster = roster::parse_preferences(&input::read_roster(path)?, &session.config.roster);

    let mut options = classkit::options::preference_groups(&session.config, sizing.into());
    if let Some(raw) = delimiters {
        options = options.delimiters(Delimiters::parse_list(raw));
    }
    options.seed = session.seed;

    let groups = form_preference_groups(&roster, &options).context("Cannot create project groups")?;
    info!(groups = groups.len(), "Created project groups");

    Ok(render_groups(&groups, session.format))
}
