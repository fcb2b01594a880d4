#![forbid(unsafe_code)]

//! Structured logging setup.
//!
//! alertkit crates emit `tracing` events (button finalization, slot
//! assignment, precondition failures). Hosts that have no subscriber of their
//! own can install a `fmt` subscriber here.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ALERTKIT_LOG` | `EnvFilter` directives | `warn` |
//! | `ALERTKIT_LOG_FORMAT` | `json` for JSON lines, anything else for text | text |

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "ALERTKIT_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "ALERTKIT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `alertkit_widgets=debug`.
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Read `ALERTKIT_LOG` and `ALERTKIT_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(LOG_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    /// Build a config from raw variable values.
    #[must_use]
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let json = format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"));
        Self { filter, json }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Errors from [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInitError {
    /// The filter directives could not be parsed.
    InvalidFilter(String),
    /// A global subscriber is already installed.
    AlreadyInitialized(String),
}

impl std::fmt::Display for LogInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::AlreadyInitialized(msg) => write!(f, "logging already initialized: {msg}"),
        }
    }
}

impl std::error::Error for LogInitError {}

/// Install a global `fmt` subscriber.
///
/// Returns an error instead of panicking when a subscriber already exists.
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|err| LogInitError::InvalidFilter(err.to_string()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| LogInitError::AlreadyInitialized(err.to_string()))?;
    tracing::debug!(filter = %config.filter, json = config.json, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn_text() {
        let config = LogConfig::default();
        assert_eq!(config.filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn from_vars_reads_filter_and_format() {
        let config = LogConfig::from_vars(
            Some("alertkit_widgets=debug".to_string()),
            Some("JSON".to_string()),
        );
        assert_eq!(config.filter, "alertkit_widgets=debug");
        assert!(config.json);
    }

    #[test]
    fn from_vars_blank_filter_falls_back() {
        let config = LogConfig::from_vars(Some("   ".to_string()), Some("text".to_string()));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn builder_setters() {
        let config = LogConfig::default().filter("debug").json(true);
        assert_eq!(config.filter, "debug");
        assert!(config.json);
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LogConfig::default().filter("alertkit=not_a_level");
        assert!(matches!(
            init_logging(&config),
            Err(LogInitError::InvalidFilter(_))
        ));
    }

    #[test]
    fn second_init_reports_already_initialized() {
        let config = LogConfig::default();
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(LogInitError::AlreadyInitialized(_))
        ));
    }
}
