use crate::handlers::TOO_FEW_PARTICIPANTS;
use crate::models::args::OutputFormat;
use crate::models::session::Session;
use crate::services::{input, roster};
use anyhow::Result;
use classkit::grouping::{export, match_peer_reviews};
use std::path::Path;
use tracing::info;

/// Builds the review cycle for the listed participants.
///
/// # Errors
/// Returns an error if the roster cannot be read.
pub fn match_reviews(session: &Session, path: &Path) -> Result<String> {
    let participants = roster::parse_names(&input::read_roster(path)?);
    let pairs = match_peer_reviews(&participants, session.seed);
    info!(pairs = pairs.len(), "Matched peer reviews");

    Ok(match session.format {
        OutputFormat::Csv => export::reviews_csv(&pairs),
        OutputFormat::Text if pairs.is_empty() => format!("{TOO_FEW_PARTICIPANTS}\n"),
        OutputFormat::Text => export::reviews_text(&pairs),
    })
}
