//! # Logger
//!
//! Installs the global `tracing` subscriber for classkit binaries.
//!
//! Console output goes to **stderr** so that command output written to stdout
//! (CSV exports, group listings) stays machine-readable. Optionally a rolling,
//! non-blocking file appender is attached; file output can be switched to JSON.
//!
//! Filtering starts from the configured [`LevelFilter`], may be refined with
//! [`LoggerBuilder::env_filter`], and is overridden by `RUST_LOG` when no explicit
//! filter is set.
//!
//! ## Example
//!
//! ```rust
//! use classkit_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("classkit")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::WARN,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Type-state builder for the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available, and file-only
/// settings (`rotation`, `max_files`, `json`) only exist after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    config: LoggerConfig,
    name: N,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { config: self.config, name: Named(name.into()), output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level emitted when no env filter applies.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds explicit filter directives, e.g. `classkit_grouping=trace`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes logs into rolling files under `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, output: PhantomData }
    }

    /// Validates the configuration and installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the background writer guard; keep it alive
    /// until the program exits so buffered file output is flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   bad filter directives, or when no output layer is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.config, &name)?;
        let filter = env_filter(&self.config)?;

        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

        if self.config.console {
            layers.push(fmt::layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = match &self.config.path {
            Some(path) => {
                std::fs::create_dir_all(path)
                    .context(format!("Failed to create {}", path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(path)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if self.config.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// Maximum number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Emits file output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed, output: PhantomData }
    }

    /// The file writer guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
        None => Ok(builder.from_env_lossy()),
    }
}
