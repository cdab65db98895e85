//! Logging infrastructure for type analysis and rendering
//!
//! Structured logging through `tracing` and `tracing-subscriber`.
//! Log output always goes to stderr so that rendered diagrams written to
//! stdout stay clean.
//!
//! # Usage
//!
//! ```rust,no_run
//! use typegram::core::logging::init_logging;
//!
//! // Level and format from the environment, or warn/compact
//! init_logging(None, None).ok();
//!
//! // Explicit level and format
//! init_logging(Some("debug"), Some("pretty")).ok();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: one line per event (default)
//! - `pretty`: multi-line events with span enter/exit, source locations
//! - `json`: one JSON object per event
//!
//! # Environment Variables
//!
//! - `TYPEGRAM_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `TYPEGRAM_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter, takes precedence
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show why members were skipped during extraction
//! RUST_LOG="typegram::analysis=trace" typegram render --input zoo.json
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Default level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output layout of log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event
    Compact,
    /// Multi-line, with source locations
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Names accepted by `from_str`
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Install the global subscriber
///
/// * `level` - Optional log level string. Falls back to `TYPEGRAM_LOG_LEVEL`,
///   then `RUST_LOG`, then [`DEFAULT_LOG_LEVEL`].
/// * `format` - Optional log format. Falls back to `TYPEGRAM_LOG_FORMAT`,
///   then `compact`.
///
/// Returns an error if the format is unknown or a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TYPEGRAM_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TYPEGRAM_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&log_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_file(false)
                        .with_line_number(false)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging with default settings
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
