//! # Logger
//!
//! Installs the global `tracing` subscriber for CorBas binaries.
//!
//! * Compact ANSI console output (on by default).
//! * Optional daily-rolling file output, plain or JSON, written by a
//!   non-blocking worker; keep the returned [`Logger`] alive to flush it.
//! * Filtering from `RUST_LOG`, or from an explicit directive string set with
//!   [`LoggerBuilder::env_filter`].
//!
//! File-only options (`json`, `rotation`, `max_files`) are available only
//! after [`LoggerBuilder::path`] has been called.
//!
//! ```rust
//! use corbas_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("corbas-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    filter: Option<String>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            filter: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state carrying the logger name.
#[derive(Debug)]
pub struct Named(String);
/// Builder state without file output.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state with file output.
#[derive(Debug)]
pub struct WithFile;

/// Typestate builder for the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed, F = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<F>,
}

impl<F> LoggerBuilder<Unnamed, F> {
    /// Names the logger; the name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl<F> LoggerBuilder<Named, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives such as `corbas_analysis=debug,hyper=info`.
    ///
    /// Replaces `RUST_LOG`; an unparsable directive makes [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Enables file output under `directory`.
    pub fn path(mut self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        self.settings.directory = Some(directory.into());
        LoggerBuilder { settings: self.settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero
    ///   `max_files`, a bad filter or no enabled output.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log
    ///   directory or file cannot be created.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        let settings = self.settings;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match &settings.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(&settings, directory, &name)?;
                layers.push(layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; enable the console or set a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// Writes file output as JSON lines.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }
}

/// Handle to the installed subscriber.
///
/// Holds the file writer's worker guard; dropping it flushes pending lines.
#[must_use = "dropping the logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(
    settings: &Settings,
    directory: &Path,
    name: &str,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(directory)
        .context(format!("Creating log directory {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(directory)
        .context(format!("Opening log files in {}", directory.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if settings.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("corbas-test");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.filter.is_none());
        assert!(builder.settings.directory.is_none());
        assert!(!builder.settings.json);
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("corbas-test")
            .env_filter("corbas_analysis=debug")
            .path("/tmp/corbas-logs")
            .json(true)
            .max_files(3);

        assert_eq!(builder.settings.filter.as_deref(), Some("corbas_analysis=debug"));
        assert_eq!(builder.settings.max_files, 3);
        assert!(builder.settings.json);
        assert_eq!(builder.settings.directory, Some(PathBuf::from("/tmp/corbas-logs")));
    }

    #[test]
    #[serial]
    fn blank_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn bad_filter_is_rejected() {
        let err = Logger::builder()
            .name("corbas-test")
            .env_filter("corbas=[[[")
            .init()
            .expect_err("bad filter must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn no_output_is_rejected() {
        let err =
            Logger::builder().name("corbas-test").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
