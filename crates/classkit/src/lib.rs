//! Facade crate for the classroom toolkit.
//! Re-exports the domain model, configuration kernel and grouping slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `classkit` and reach for [`prelude`] for the common entry points.
//! - Load a [`domain::config::ClassroomConfig`] with [`kernel::config::load_config`] and
//!   derive per-call options from it with [`options`].

pub use classkit_domain as domain;
pub use classkit_grouping as grouping;
pub use classkit_kernel as kernel;

/// Everything needed to call the four entry points.
pub mod prelude {
    pub use classkit_domain::assignment::{Group, ReviewPair};
    pub use classkit_domain::config::ClassroomConfig;
    pub use classkit_domain::roster::{Cell, ColumnRoster, TabularSource};
    pub use classkit_grouping::{
        ColdCallOptions, ConfigurationError, ConfigurationErrorExt, ConfigurationErrorKind, Delimiters,
        PreferenceGroupOptions, Sizing, cold_call_candidates, form_preference_groups, make_breakout_groups,
        match_peer_reviews,
    };
}

/// Per-call options seeded from configuration defaults.
pub mod options {
    use classkit_domain::config::ClassroomConfig;
    use classkit_grouping::{ColdCallOptions, Delimiters, PreferenceGroupOptions, Sizing};

    /// Cold-call options using the configured columns, sample size and opt-out policy.
    #[must_use]
    pub fn cold_call(config: &ClassroomConfig) -> ColdCallOptions {
        ColdCallOptions::new()
            .name_column(config.roster.name_column.as_str())
            .excused_column(config.roster.excused_column.as_str())
            .include_excused(config.cold_call.include_excused)
            .sample_size(config.cold_call.sample_size)
    }

    /// Preference grouping options using the configured columns and delimiters.
    #[must_use]
    pub fn preference_groups(config: &ClassroomConfig, sizing: Sizing) -> PreferenceGroupOptions {
        PreferenceGroupOptions::new(sizing)
            .name_column(config.roster.name_column.as_str())
            .preference_column(config.roster.preference_column.as_str())
            .delimiters(Delimiters::new(config.preferences.delimiters.iter().map(String::as_str)))
    }
}
