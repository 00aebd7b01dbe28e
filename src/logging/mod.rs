//! Logging configuration and initialization
//!
//! Centralized tracing setup for the generator CLI. Supports human-readable
//! and JSON output, configurable via environment variables:
//!
//! - `RUST_LOG`: standard tracing filter (e.g. "info", "vecforge=debug")
//! - `VECFORGE_LOG_LEVEL`: simple log level (error, warn, info, debug, trace)
//! - `VECFORGE_LOG_FORMAT`: output format ("human" or "json")

use once_cell::sync::OnceCell;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Global flag to track if tracing has been initialized
static TRACING_INITIALIZED: OnceCell<()> = OnceCell::new();

const LOG_LEVEL_ENV: &str = "VECFORGE_LOG_LEVEL";
const LOG_FORMAT_ENV: &str = "VECFORGE_LOG_FORMAT";

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to EnvFilter directive
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable colored output (default)
    #[default]
    Human,
    /// JSON structured output
    Json,
}

impl LogFormat {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" | "pretty" | "console" => Some(LogFormat::Human),
            "json" | "structured" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Whether to include file/line in log events
    pub with_file_info: bool,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Initialize logging from environment variables.
///
/// Reads `RUST_LOG` (standard filter), then `VECFORGE_LOG_LEVEL` and
/// `VECFORGE_LOG_FORMAT`. Idempotent: only the first call installs a
/// subscriber.
pub fn init_logging_from_env() {
    TRACING_INITIALIZED.get_or_init(|| {
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|s| LogLevel::parse(&s))
            .unwrap_or_default();
        let format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| LogFormat::parse(&s))
            .unwrap_or_default();
        let config = LoggingConfig::new().with_level(level).with_format(format);
        install_subscriber(&config);
    });
}

/// Initialize logging with a custom configuration. Idempotent.
pub fn init_with_config(config: &LoggingConfig) {
    TRACING_INITIALIZED.get_or_init(|| {
        install_subscriber(config);
    });
}

fn install_subscriber(config: &LoggingConfig) {
    // RUST_LOG wins when set, otherwise the configured level.
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_str()))
        }
        Err(_) => EnvFilter::new(config.level.as_filter_str()),
    };

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(false)
                .with_file(config.with_file_info)
                .with_line_number(config.with_file_info);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .init();
        }
        LogFormat::Human => {
            let layer = fmt::layer()
                .with_target(true)
                .with_file(config.with_file_info)
                .with_line_number(config.with_file_info);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .init();
        }
    }
}
