//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! All crates of the browser log through `tracing`; this module installs the
//! subscriber for the terminal host.
//!
//! # Log Levels
//!
//! - `error`: Output could not be written
//! - `warn`: Failed loads, unknown destinations, rejected settings files
//! - `info`: Startup, load completion, reloads
//! - `debug`: Every state transition and history change
//! - `trace`: Router echo handling
//!
//! # Usage
//!
//! ```no_run
//! use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
//! use tracing::level_filters::LevelFilter;
//!
//! let config = LogConfig::default()
//!     .with_level(LevelFilter::DEBUG)
//!     .with_format(LogFormat::Compact);
//! init_logging(&config)?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Crates whose events follow the configured level; everything else stays at `warn`.
const OWN_CRATES: [&str; 4] = ["catalog_cli", "catalog_core", "catalog_ingest", "catalog_model"];

/// How the browser host logs. Built from the global CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the browser's own crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    /// Timestamps are only worth having in a log file.
    pub with_timestamps: bool,
    /// Print the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

/// `--log-format` choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// One JSON object per event, for piping next to `--json` output.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the browser's subscriber: stderr, or the `--log-file` when one is set.
///
/// Call once, before the first event. A second call panics.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        registry.with(event_layer(config, SharedFileWriter::new(file))).init();
    } else {
        registry.with(event_layer(config, io::stderr)).init();
    }
    Ok(())
}

/// The formatting layer for the configured format. ANSI colours never go into JSON.
fn event_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    let ansi = config.with_ansi;
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.json().boxed(),
        (LogFormat::Compact, true) => layer.compact().with_ansi(ansi).boxed(),
        (LogFormat::Compact, false) => layer.compact().with_ansi(ansi).without_time().boxed(),
        (LogFormat::Pretty, true) => layer.with_ansi(ansi).boxed(),
        (LogFormat::Pretty, false) => layer.with_ansi(ansi).without_time().boxed(),
    }
}

/// Hands every logging thread a guard onto the one `--log-file` handle.
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileGuard {
    fn lock(&self) -> io::Result<MutexGuard<'_, std::fs::File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

/// Filter directives: external crates at `warn`, ours at `level`.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}
