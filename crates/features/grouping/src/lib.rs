//! # Classroom Grouping
//!
//! Randomised and preference-driven assignment of students to groups and roles.
//!
//! ## Entry points
//!
//! * [`breakout::make_breakout_groups`]: shuffle names into evenly sized groups.
//! * [`cold_call::cold_call_candidates`]: pick students to call on, honouring opt-outs.
//! * [`peer_review::match_peer_reviews`]: a single review cycle over all participants.
//! * [`project_groups::form_preference_groups`]: cluster students by shared topics.
//!
//! Every operation is a pure function over its inputs. Randomness comes from a
//! per-call generator seeded by the caller (or freshly drawn and logged at `debug`),
//! so the same seed and input always give the same result.
//!
//! Rosters are read through [`classkit_domain::roster::TabularSource`]; turning a file
//! or database into a roster is the caller's job.

pub mod assembler;
pub mod breakout;
pub mod cold_call;
mod error;
pub mod export;
pub mod peer_review;
pub mod plan;
pub mod preferences;
pub mod project_groups;
pub mod roster;
pub mod sampling;
pub mod similarity;

pub use crate::breakout::make_breakout_groups;
pub use crate::cold_call::{ColdCallOptions, cold_call_candidates};
pub use crate::error::{ConfigurationError, ConfigurationErrorExt, ConfigurationErrorKind};
pub use crate::peer_review::match_peer_reviews;
pub use crate::plan::{GroupPlan, Sizing};
pub use crate::preferences::{Delimiters, PreferenceSet};
pub use crate::project_groups::{PreferenceGroupOptions, form_preference_groups};
pub use classkit_domain::assignment::{Group, ReviewPair};
