use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Environment variable prefix; nested keys use `__` (`CLASSKIT__COLD_CALL__SAMPLE_SIZE`).
pub const ENV_PREFIX: &str = "CLASSKIT";

/// File stem looked up in the working directory when no path is given
/// (`classkit.toml`, `classkit.yaml`, `classkit.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "classkit";

#[classkit_derive::classkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// List-valued keys that may be overridden from the environment as space-separated values
/// (`CLASSKIT__PREFERENCES__DELIMITERS="/ ;"`).
pub const ENV_LIST_KEYS: &[&str] = &["preferences.delimiters"];

/// The `CLASSKIT__*` environment layer.
///
/// Values are parsed into booleans and numbers where possible, so typed fields
/// deserialize even behind `#[serde(flatten)]`.
#[must_use]
pub fn environment() -> Environment {
    ENV_LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .list_separator(" "),
        |env, key| env.with_list_parse_key(key),
    )
}

/// Loads configuration from a file overlaid with `CLASSKIT__*` environment variables.
///
/// * With an explicit `path` the file **must** exist.
/// * Without one, `classkit.*` in the working directory is used when present;
///   otherwise only environment variables and `T`'s serde defaults apply.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// [`load_config`] with a caller-supplied environment layer.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            debug!(path = %p.as_ref().display(), "Loading config file");
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!(stem = DEFAULT_CONFIG_STEM, "Looking for optional config file");
            File::with_name(DEFAULT_CONFIG_STEM).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
