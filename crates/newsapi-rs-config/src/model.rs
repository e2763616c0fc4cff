//! Parameter schema and settings for the News API extension.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment variable holding the comma-separated domain allow-list.
pub const DOMAINS_ENV: &str = "DOMAINS";
/// Environment variable holding the comma-separated domain deny-list.
pub const EXCLUDE_DOMAINS_ENV: &str = "EXCLUDE_DOMAINS";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "NEWSAPI_BASE_URL";
/// Default provider base URL; the search endpoint lives under it.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// How the host should render and store a parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Plain text value.
    #[default]
    Text,
    /// Secret value, masked in the host UI.
    Password,
}

/// Declaration of an operator-supplied parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub possible_values: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl ParameterSpec {
    /// Declare an optional text parameter.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParameterKind::Text,
            possible_values: Vec::new(),
            required: false,
        }
    }

    /// Set the parameter kind.
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Suggest example values in the host UI.
    pub fn with_possible_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.possible_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Parameters declared by the News API extension.
pub fn news_api_parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new(API_KEY_ENV, "The copied API key.")
            .with_kind(ParameterKind::Password)
            .required(),
        ParameterSpec::new(
            DOMAINS_ENV,
            "A comma-separated string of domains to restrict the search to.",
        )
        .with_possible_values([
            "bbc.co.uk",
            "blog.jetbrains.com,javascriptweekly.com,stackoverflow.com",
        ]),
        ParameterSpec::new(
            EXCLUDE_DOMAINS_ENV,
            "A comma-separated string of domains to remove from the results.",
        )
        .with_possible_values(["www.xataka.com", "www.businessinsider.com,www.theverge.com"]),
    ]
}

/// Read-only settings resolved before a search runs.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewsApiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub domains: Option<String>,
    #[serde(default)]
    pub exclude_domains: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for NewsApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            domains: None,
            exclude_domains: None,
            base_url: default_base_url(),
        }
    }
}

impl fmt::Debug for NewsApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSettings")
            .field("api_key", &"[REDACTED]")
            .field("domains", &self.domains)
            .field("exclude_domains", &self.exclude_domains)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NewsApiSettings {
    /// Start building settings programmatically with defaults applied.
    pub fn builder() -> NewsApiSettingsBuilder {
        NewsApiSettingsBuilder::new()
    }

    /// Domain allow-list, if set to a non-blank value.
    pub fn domains(&self) -> Option<&str> {
        non_blank(self.domains.as_deref())
    }

    /// Domain deny-list, if set to a non-blank value.
    pub fn exclude_domains(&self) -> Option<&str> {
        non_blank(self.exclude_domains.as_deref())
    }

    /// Collapse blank optional values to `None` and trim the base URL.
    pub fn normalized(mut self) -> Self {
        self.domains = non_blank(self.domains.as_deref()).map(str::to_string);
        self.exclude_domains = non_blank(self.exclude_domains.as_deref()).map(str::to_string);
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Validate invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "apiKey".to_string(),
                message: format!("an API key is required (set the {API_KEY_ENV} parameter)"),
            });
        }
        let url = Url::parse(&self.base_url).map_err(|err| ConfigError::InvalidField {
            path: "baseUrl".to_string(),
            message: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidField {
                path: "baseUrl".to_string(),
                message: format!("unsupported scheme: {}", url.scheme()),
            });
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Builder for assembling `NewsApiSettings` in code.
#[derive(Debug, Default, Clone)]
pub struct NewsApiSettingsBuilder {
    settings: NewsApiSettings,
}

impl NewsApiSettingsBuilder {
    /// Create a new builder seeded with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.settings.api_key = api_key.into();
        self
    }

    /// Restrict searches to a comma-separated list of domains.
    pub fn domains(mut self, domains: impl Into<String>) -> Self {
        self.settings.domains = Some(domains.into());
        self
    }

    /// Remove a comma-separated list of domains from results.
    pub fn exclude_domains(mut self, exclude_domains: impl Into<String>) -> Self {
        self.settings.exclude_domains = Some(exclude_domains.into());
        self
    }

    /// Point the client at a different provider root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.settings.base_url = base_url.into();
        self
    }

    /// Finalize, normalize and validate the settings.
    pub fn build(self) -> Result<NewsApiSettings, ConfigError> {
        let settings = self.settings.normalized();
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_normalizes_blank_domains() {
        let settings = NewsApiSettings::builder()
            .api_key("key")
            .domains("  ")
            .exclude_domains("www.xataka.com")
            .base_url("https://newsapi.org/v2/")
            .build()
            .expect("settings");
        assert_eq!(settings.domains, None);
        assert_eq!(settings.exclude_domains(), Some("www.xataka.com"));
        assert_eq!(settings.base_url, "https://newsapi.org/v2");
    }

    #[test]
    fn builder_requires_api_key() {
        let err = NewsApiSettings::builder().build().expect_err("missing key");
        match err {
            ConfigError::InvalidField { path, .. } => assert_eq!(path, "apiKey"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let err = NewsApiSettings::builder()
            .api_key("key")
            .base_url("ftp://newsapi.org")
            .build()
            .expect_err("bad scheme");
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let settings = NewsApiSettings::builder()
            .api_key("super-secret")
            .build()
            .expect("settings");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn parameters_declare_api_key_as_required_password() {
        let parameters = news_api_parameters();
        let names = parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["API_KEY", "DOMAINS", "EXCLUDE_DOMAINS"]);
        assert_eq!(parameters[0].kind, ParameterKind::Password);
        assert!(parameters[0].required);
        assert!(!parameters[1].required);
        assert_eq!(parameters[2].possible_values.len(), 2);
    }
}
