//! Parameter declarations and layered settings loading.
//!
//! This crate owns the News API parameter schema, the read-only
//! `NewsApiSettings` passed into every search, and the layer-merging logic
//! used by both the SDK and the CLI.

mod error;
mod loader;
mod model;

/// Public error type returned by settings loading and validation APIs.
pub use error::ConfigError;
/// Layered settings types and loader options.
pub use loader::{LayeredSettings, SettingsLayer, SettingsLayerSource, SettingsLoadOptions};
/// Parameter and settings models.
pub use model::*;
