//! One handler per subcommand. Handlers return the rendered output; printing is left
//! to `main`.

pub mod breakout;
pub mod cold_call;
pub mod peer_review;
pub mod project_groups;

use crate::models::args::{OutputFormat, SizingArgs};
use classkit::domain::assignment::Group;
use classkit::grouping::{Sizing, export};

pub(crate) const NO_GROUPS: &str = "No groups to create.";
pub(crate) const NO_ELIGIBLE: &str = "No eligible students found.";
pub(crate) const TOO_FEW_PARTICIPANTS: &str = "Need at least two participants to create matches.";

impl From<SizingArgs> for Sizing {
    fn from(args: SizingArgs) -> Self {
        Self::new(args.teams, args.group_size)
    }
}

/// Renders groups, or the empty-state message for text output.
pub(crate) fn render_groups(groups: &[Group], format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => export::groups_csv(groups),
        OutputFormat::Text if groups.is_empty() => format!("{NO_GROUPS}\n"),
        OutputFormat::Text => export::groups_text(groups),
    }
}
