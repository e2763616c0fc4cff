//! Layered settings loader.
//!
//! Discovers settings layers (user file, cwd file, environment, runtime
//! files), merges them in precedence order, and produces validated
//! `NewsApiSettings`.

mod merge;


use crate::{
    API_KEY_ENV, BASE_URL_ENV, ConfigError, DOMAINS_ENV, EXCLUDE_DOMAINS_ENV, NewsApiSettings,
};
use directories::UserDirs;
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "newsapi.json5";
/// Default settings directory under the home directory.
const DEFAULT_CONFIG_DIR: &str = ".newsapi";

/// Environment variables mapped onto settings keys.
const ENV_KEYS: &[(&str, &str)] = &[
    (API_KEY_ENV, "apiKey"),
    (DOMAINS_ENV, "domains"),
    (EXCLUDE_DOMAINS_ENV, "excludeDomains"),
    (BASE_URL_ENV, "baseUrl"),
];

/// Effective settings plus metadata about which layers were applied.
#[derive(Debug, Clone)]
pub struct LayeredSettings {
    /// The merged, validated settings.
    pub settings: NewsApiSettings,
    /// Metadata for each layer applied during load.
    pub layers: Vec<SettingsLayer>,
}

/// Origin for a single settings layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLayerSource {
    /// User-specific settings file.
    User,
    /// Current working directory settings file.
    Cwd,
    /// Process environment variables.
    Environment,
    /// Explicit runtime settings files (highest precedence).
    Runtime,
}

/// Metadata about an applied settings layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLayer {
    /// Layer origin.
    pub source: SettingsLayerSource,
    /// Location on disk, for file layers.
    pub path: Option<PathBuf>,
}

/// Options controlling layered settings discovery.
#[derive(Debug, Clone)]
pub struct SettingsLoadOptions {
    /// Working directory used to locate the cwd layer.
    pub cwd: PathBuf,
    /// Optional user settings path (defaults to `~/.newsapi/newsapi.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Environment values consulted for the environment layer.
    pub environment: BTreeMap<String, String>,
    /// Runtime settings paths applied last; these must exist.
    pub runtime_paths: Vec<PathBuf>,
}

impl SettingsLoadOptions {
    /// Create options with default layer locations and the process environment.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        let environment = ENV_KEYS
            .iter()
            .filter_map(|(name, _)| {
                std::env::var(name)
                    .ok()
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            user_config_path: default_user_config_path(),
            environment,
            runtime_paths: Vec::new(),
        }
    }

    /// Add a runtime settings path that is applied last.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl NewsApiSettings {
    /// Load settings from a single JSON5 file (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading settings from path: {}", path.as_ref().display());
        let value = read_layer(path.as_ref())?;
        settings_from_value(value)
    }

    /// Load settings from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading settings from raw contents (len={})", contents.len());
        let value = parse_layer(contents)?;
        settings_from_value(value)
    }

    /// Load layered settings using explicit layer locations.
    ///
    /// Layer precedence (low -> high): user, cwd, environment, runtime.
    pub fn load_layered_with_options(
        options: SettingsLoadOptions,
    ) -> Result<LayeredSettings, ConfigError> {
        let mut layers = Vec::new();
        let mut merged = Value::Object(Map::new());

        let optional_files = [
            (SettingsLayerSource::User, options.user_config_path.clone()),
            (
                SettingsLayerSource::Cwd,
                Some(options.cwd.join(DEFAULT_CONFIG_FILE)),
            ),
        ];
        for (source, path) in optional_files {
            let Some(path) = path else {
                continue;
            };
            if !path.exists() {
                debug!(
                    "optional layer missing (source={:?}, path={})",
                    source,
                    path.display()
                );
                continue;
            }
            let value = read_layer(&path)?;
            merge::merge_json_values(&mut merged, &value);
            debug!("loaded layer (source={:?}, path={})", source, path.display());
            layers.push(SettingsLayer {
                source,
                path: Some(path),
            });
        }

        let env_value = environment_layer(&options.environment);
        if env_value.as_object().is_some_and(|map| !map.is_empty()) {
            merge::merge_json_values(&mut merged, &env_value);
            debug!("loaded environment layer");
            layers.push(SettingsLayer {
                source: SettingsLayerSource::Environment,
                path: None,
            });
        }

        for path in &options.runtime_paths {
            let value = read_layer(path)?;
            merge::merge_json_values(&mut merged, &value);
            debug!("loaded runtime layer (path={})", path.display());
            layers.push(SettingsLayer {
                source: SettingsLayerSource::Runtime,
                path: Some(path.clone()),
            });
        }

        let settings = settings_from_value(merged)?;
        info!("layered settings loaded (layers={})", layers.len());
        Ok(LayeredSettings { settings, layers })
    }
}

/// Default user settings path under the home directory.
fn default_user_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}

fn read_layer(path: &Path) -> Result<Value, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_layer(&contents)
}

fn parse_layer(contents: &str) -> Result<Value, ConfigError> {
    let value: Value = json5::from_str(contents)?;
    if !value.is_object() {
        return Err(ConfigError::Invalid(
            "settings layer must be an object".to_string(),
        ));
    }
    Ok(value)
}

/// Map known environment variables onto settings keys.
fn environment_layer(environment: &BTreeMap<String, String>) -> Value {
    let mut map = Map::new();
    for (name, key) in ENV_KEYS {
        if let Some(value) = environment.get(*name) {
            map.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    Value::Object(map)
}

fn settings_from_value(value: Value) -> Result<NewsApiSettings, ConfigError> {
    let settings: NewsApiSettings = serde_json::from_value(value)?;
    let settings = settings.normalized();
    settings.validate()?;
    Ok(settings)
}
