//! # Logging Infrastructure
//!
//! Structured logging with `tracing` for the console.
//!
//! Log events go to stderr so they never interleave with command output on
//! stdout. An optional log file rotates daily.
//!
//! ## Quick Start
//!
//! ```no_run
//! use safe_cli::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Debug,
//!     ..LogConfig::default()
//! };
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("console started");
//! ```
//!
//! ## From the configuration file
//!
//! ```
//! use safe_cli::logging::{LogConfig, LogFormat, LogLevel};
//! use safe_cli_core::{LogFormatSetting, LoggingConfig};
//!
//! let settings = LoggingConfig {
//!     file: None,
//!     format: LogFormatSetting::Json,
//! };
//! let config = LogConfig::from_settings(&settings, 2).expect("valid settings");
//!
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.format, LogFormat::Json);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use safe_cli_core::{expand_path, LogFormatSetting, LoggingConfig};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

pub use safe_cli_core::redact_sensitive;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Error type for logging initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Failed to create the log file or its directory.
    #[error("Failed to create log file: {0}")]
    FileCreation(String),

    /// Failed to install the subscriber.
    #[error("Failed to initialize logging: {0}")]
    SubscriberInit(String),

    /// The settings cannot be turned into a subscriber.
    #[error("Invalid log configuration: {0}")]
    InvalidConfig(String),
}

/// Minimum severity that is logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Debug and above.
    Debug,
    /// Info and above.
    Info,
    /// Warnings and errors. What the console shows without `-v`.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Convert to a tracing [`Level`].
    #[must_use]
    pub const fn as_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }

    /// Directive string for [`EnvFilter`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
    /// Single line per event.
    Compact,
}

impl From<LogFormatSetting> for LogFormat {
    fn from(setting: LogFormatSetting) -> Self {
        match setting {
            LogFormatSetting::Pretty => Self::Pretty,
            LogFormatSetting::Json => Self::Json,
            LogFormatSetting::Compact => Self::Compact,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum level. Defaults to [`LogLevel::Warn`].
    pub level: LogLevel,

    /// Output format for stderr and the log file.
    pub format: LogFormat,

    /// Optional log file, rotated daily. Its directory is created if missing.
    pub file_path: Option<PathBuf>,

    /// Attach a correlation id to every dispatched line.
    pub correlation_ids: bool,
}

impl LogConfig {
    /// Build from the `[logging]` section and the `-v` count.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if the file path uses `~` and no
    /// home directory can be found.
    pub fn from_settings(settings: &LoggingConfig, verbosity: u8) -> Result<Self, LogError> {
        let file_path = settings
            .file
            .as_deref()
            .map(expand_path)
            .transpose()
            .map_err(|e| LogError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            level: verbosity_to_level(verbosity),
            format: settings.format.into(),
            file_path,
            correlation_ids: true,
        })
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    guard: Option<WorkerGuard>,
}

impl fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGuard")
            .field("has_file_guard", &self.guard.is_some())
            .finish()
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`LogError`] if the log directory cannot be created, the file name
/// is unusable, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, LogError> {
    let filter = EnvFilter::try_new(config.level.as_str())
        .map_err(|e| LogError::InvalidConfig(e.to_string()))?;

    let mut layers = vec![console_layer(config.format)];
    let guard = match config.file_path.as_deref() {
        Some(path) => {
            let (writer, guard) = open_log_file(path)?;
            layers.push(file_layer(config.format, writer));
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LogError::SubscriberInit(e.to_string()))?;

    Ok(LogGuard { guard })
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard), LogError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .map_err(|e| LogError::FileCreation(format!("{}: {e}", dir.display())))?;

    let filename = path
        .file_name()
        .ok_or_else(|| LogError::InvalidConfig("Invalid log file name".to_string()))?;

    let appender = tracing_appender::rolling::daily(dir, filename);
    Ok(tracing_appender::non_blocking(appender))
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    match format {
        LogFormat::Pretty => layer.pretty().with_span_events(FmtSpan::CLOSE).boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

fn file_layer(format: LogFormat, writer: NonBlocking) -> BoxedLayer {
    let layer = tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    match format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty | LogFormat::Compact => layer.compact().boxed(),
    }
}

/// Generate a 32-hex-character id for correlating the events of one line.
///
/// ```
/// use safe_cli::logging::new_correlation_id;
///
/// let id = new_correlation_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// assert_ne!(id, new_correlation_id());
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn new_correlation_id() -> String {
    use std::fmt::Write;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let seed = timestamp.wrapping_add(u128::from(counter));

    // LCG over the seed; not for cryptographic use.
    let mut state = seed;
    let mut mixed = [0u8; 8];
    for byte in &mut mixed {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        *byte = (state >> 56) as u8;
    }

    (seed as u64)
        .to_be_bytes()
        .iter()
        .chain(mixed.iter())
        .fold(String::with_capacity(32), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// Open an `info` span carrying a correlation id.
///
/// ```
/// use safe_cli::{new_correlation_id, with_correlation_id};
///
/// let span = with_correlation_id!(new_correlation_id(), "command", name = "get_nonce");
/// let _entered = span.enter();
/// ```
#[macro_export]
macro_rules! with_correlation_id {
    ($id:expr, $name:expr) => {
        tracing::info_span!($name, correlation_id = %$id)
    };
    ($id:expr, $name:expr, $($fields:tt)*) => {
        tracing::info_span!($name, correlation_id = %$id, $($fields)*)
    };
}

/// Map the `-v` count to a level.
///
/// | Verbosity | Level |
/// |-----------|-------|
/// | 0         | Warn  |
/// | 1         | Info  |
/// | 2         | Debug |
/// | 3+        | Trace |
#[must_use]
pub const fn verbosity_to_level(verbosity: u8) -> LogLevel {
    match verbosity {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}
