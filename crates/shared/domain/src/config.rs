use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level classroom configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassroomConfigInner {
    pub roster: RosterColumns,
    pub cold_call: ColdCallDefaults,
    pub preferences: PreferenceDefaults,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClassroomConfig {
    #[serde(flatten, default)]
    inner: Arc<ClassroomConfigInner>,
}

impl Deref for ClassroomConfig {
    type Target = ClassroomConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClassroomConfig {
    fn deref_mut(&mut self) -> &mut ClassroomConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Column names looked up in rosters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub name_column: String,
    pub excused_column: String,
    pub preference_column: String,
}

/// Defaults for cold calling when the caller does not override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColdCallDefaults {
    pub sample_size: usize,
    pub include_excused: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferenceDefaults {
    /// Literal substrings separating topics in a preference cell.
    pub delimiters: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            name_column: "name".to_owned(),
            excused_column: "excused".to_owned(),
            preference_column: "preferences".to_owned(),
        }
    }
}

impl Default for ColdCallDefaults {
    fn default() -> Self {
        Self { sample_size: 1, include_excused: false }
    }
}

impl Default for PreferenceDefaults {
    fn default() -> Self {
        Self { delimiters: vec![",".to_owned()] }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, directory: None }
    }
}
