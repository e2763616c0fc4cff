//! Public SDK surface for the News API extension.
//!
//! This crate re-exports the building blocks and provides a small
//! initialization helper to keep host setup consistent.

/// Re-export for convenience.
pub use newsapi_rs_config as config;
/// Re-export for convenience.
pub use newsapi_rs_protocol as protocol;
/// Re-export for convenience.
pub use newsapi_rs_tools as tools;

pub use newsapi_rs_config::NewsApiSettings;
pub use newsapi_rs_protocol::{EventSink, Media};
pub use newsapi_rs_tools::{Extension, NewsApiClient, SearchOutcome, ToolContext, ToolServices};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}
