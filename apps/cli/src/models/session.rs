use crate::models::args::OutputFormat;
use classkit::domain::config::ClassroomConfig;

/// Per-invocation settings shared by every handler.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ClassroomConfig,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl Session {
    #[must_use]
    pub const fn new(config: ClassroomConfig, format: OutputFormat, seed: Option<u64>) -> Self {
        Self { config, format, seed }
    }
}
