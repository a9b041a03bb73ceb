use serde::{Deserialize, Serialize};
use slog::{o, Drain, Level, Logger};
use sloggers::{null::NullLoggerBuilder, Build};

/// Settings for the root logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` or `crit`.
    pub debug_level: String,
    /// `None` for human-readable terminal output, `Some("JSON")` for one JSON object per line.
    pub log_format: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            debug_level: "info".to_string(),
            log_format: None,
        }
    }
}

fn parse_level(debug_level: &str) -> Result<Level, String> {
    match debug_level {
        "info" => Ok(Level::Info),
        "debug" => Ok(Level::Debug),
        "trace" => Ok(Level::Trace),
        "warn" => Ok(Level::Warning),
        "error" => Ok(Level::Error),
        "crit" => Ok(Level::Critical),
        unknown => Err(format!("Unknown debug-level: {}", unknown)),
    }
}

/// Build an asynchronous root logger from `config`.
///
/// Records are flushed to stdout by a dedicated thread.
pub fn create_logger(config: &LoggerConfig) -> Result<Logger, String> {
    let level = parse_level(&config.debug_level)?;

    let drain = if let Some(format) = &config.log_format {
        match format.to_uppercase().as_str() {
            "JSON" => {
                let drain = slog_json::Json::default(std::io::stdout()).fuse();
                slog_async::Async::new(drain).build()
            }
            _ => return Err(format!("Logging format not supported: {}", format)),
        }
    } else {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        slog_async::Async::new(drain).build()
    };

    Ok(Logger::root(drain.filter_level(level).fuse(), o!()))
}

pub fn null_logger() -> Result<Logger, String> {
    NullLoggerBuilder
        .build()
        .map_err(|e| format!("Failed to start null logger: {:?}", e))
}

/// Return a logger suitable for test usage.
///
/// By default no logs will be printed, but they can be enabled via the `test_logger` feature:
///
/// ```bash
/// $ cargo test -p types --features 'logging/test_logger'
/// ```
pub fn test_logger() -> Logger {
    if cfg!(feature = "test_logger") {
        sloggers::terminal::TerminalLoggerBuilder::new()
            .level(sloggers::types::Severity::Debug)
            .build()
            .expect("Should build test_logger")
    } else {
        NullLoggerBuilder.build().expect("Should build null_logger")
    }
}
