use std::borrow::Cow;

/// Caller-input validation failures raised by every grouping operation.
///
/// All variants are synchronous and final: nothing is retried and no partial
/// result is returned alongside an error.
#[classkit_derive::classkit_error]
pub enum ConfigurationError {
    /// One or both requested roster columns do not exist.
    #[error(
        "Roster is missing required column(s){}: {name_column}, {value_column}",
        format_context(.context)
    )]
    MissingColumn { name_column: String, value_column: String, context: Option<Cow<'static, str>> },

    /// The two roster columns have different lengths.
    #[error(
        "Roster columns must be the same length{}: '{name_column}' has {names} rows, '{value_column}' has {values}",
        format_context(.context)
    )]
    LengthMismatch {
        name_column: String,
        value_column: String,
        names: usize,
        values: usize,
        context: Option<Cow<'static, str>>,
    },

    /// Neither a team count nor a group size was supplied.
    #[error("Provide either team_count or group_size{}", format_context(.context))]
    MissingPlan { context: Option<Cow<'static, str>> },

    /// Team count and group size describe different groupings.
    #[error(
        "team_count and group_size describe different groupings{}: {population} participants in groups of {group_size} need {expected} groups, not {team_count}",
        format_context(.context)
    )]
    InconsistentPlan {
        population: usize,
        team_count: usize,
        group_size: usize,
        expected: usize,
        context: Option<Cow<'static, str>>,
    },

    /// A sizing parameter is below 1.
    #[error("Invalid group plan{}: {message}", format_context(.context))]
    InvalidPlan { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Cold-call sample size below 1.
    #[error("sample_size must be at least 1{}: got {requested}", format_context(.context))]
    InvalidSampleSize { requested: usize, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal grouping error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Field-free discriminant of [`ConfigurationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationErrorKind {
    MissingColumn,
    LengthMismatch,
    MissingPlan,
    InconsistentPlan,
    InvalidPlan,
    InvalidSampleSize,
    Internal,
}

impl ConfigurationError {
    #[must_use]
    pub const fn kind(&self) -> ConfigurationErrorKind {
        match self {
            Self::MissingColumn { .. } => ConfigurationErrorKind::MissingColumn,
            Self::LengthMismatch { .. } => ConfigurationErrorKind::LengthMismatch,
            Self::MissingPlan { .. } => ConfigurationErrorKind::MissingPlan,
            Self::InconsistentPlan { .. } => ConfigurationErrorKind::InconsistentPlan,
            Self::InvalidPlan { .. } => ConfigurationErrorKind::InvalidPlan,
            Self::InvalidSampleSize { .. } => ConfigurationErrorKind::InvalidSampleSize,
            Self::Internal { .. } => ConfigurationErrorKind::Internal,
        }
    }
}
