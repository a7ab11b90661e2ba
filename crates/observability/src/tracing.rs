//! Subscriber initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`). Output is JSON unless
//! `DECKSTORE_LOG_FORMAT=pretty`.

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "DECKSTORE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Self::Pretty,
            _ => Self::Json,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}

pub fn init() {
    init_with(LogFormat::from_env());
}

pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // try_init: a second call finds a global subscriber and does nothing.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
