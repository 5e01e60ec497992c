//! Logging facilities for the meetup model.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`,
//! `info!`, `debug!` and `trace!`, where `error!` represents the
//! highest-priority messages and `trace!` the lowest. The simulation
//! functions emit `trace!` messages; nothing in this crate logs above that
//! level on the happy path.
//!
//! Logging is _disabled_ by default and controlled with:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only messages with
//!    priority at least `level`

use std::sync::{Mutex, MutexGuard, OnceLock};

use env_logger::{Builder, Logger, WriteStyle};
pub use log::{debug, error, info, trace, warn, LevelFilter};
use log_reload::{ReloadHandle, ReloadLog};

// Logging disabled.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;
// Automatically determine if output supports color.
const DEFAULT_LOG_STYLE: WriteStyle = WriteStyle::Auto;

/// A global instance of the logging configuration.
static LOG_CONFIGURATION: OnceLock<Mutex<LogConfiguration>> = OnceLock::new();

/// Holds logging configuration so it can persist across reinitialization of
/// the global logger.
///
/// `env_logger::Logger` cannot be modified once constructed, and the global
/// logger cannot be installed more than once. The global logger is therefore
/// a `log_reload::ReloadLog` wrapper whose inner logger is swapped out on
/// every configuration change.
struct LogConfiguration {
    /// A level filter of `LevelFilter::Off` disables logging.
    global_log_level: LevelFilter,
    /// Whether to colorize output.
    log_style: WriteStyle,
    /// A handle that can replace the wrapped inner logger.
    log_handle: Option<ReloadHandle<Logger>>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        LogConfiguration {
            global_log_level: DEFAULT_LOG_LEVEL,
            log_style: DEFAULT_LOG_STYLE,
            log_handle: None,
        }
    }
}

impl LogConfiguration {
    /// Constructs an `env_logger::Logger` with the current configuration
    /// without installing it.
    fn build(&self) -> Logger {
        let mut builder = Builder::new();
        builder
            .filter_level(self.global_log_level)
            .write_style(self.log_style);
        builder.build()
    }
}

/// Enables the logger with no level filter / full logging. Equivalent to
/// `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to
/// `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A level of `LevelFilter::Off` disables logging.
pub fn set_log_level(level: LevelFilter) {
    let mut configuration = lock_configuration();
    configuration.global_log_level = level;
    install_logger(&mut configuration);
}

fn lock_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION
        .get_or_init(Mutex::default)
        .lock()
        .unwrap()
}

/// Initializes the global logger, or replaces the inner logger of the
/// already-installed one, to match the given configuration.
fn install_logger(configuration: &mut LogConfiguration) {
    let logger = configuration.build();

    match &configuration.log_handle {
        None => {
            let wrapping_logger = ReloadLog::new(logger);
            configuration.log_handle = Some(wrapping_logger.handle());
            let result = log::set_boxed_logger(Box::new(wrapping_logger))
                .map(|()| log::set_max_level(configuration.global_log_level));
            if let Err(error) = result {
                error!(
                    "tried to initialize a global logger that has already been set: {}",
                    error
                );
            }
        }

        Some(handle) => {
            log::set_max_level(configuration.global_log_level);
            if let Err(error) = handle.replace(logger) {
                error!("failed to set logger: {}", error);
            }
        }
    }
}
