//! News provider interface and the newsapi.org client.

use async_trait::async_trait;
use log::{debug, warn};
use newsapi_rs_config::NewsApiSettings;
use serde::{Deserialize, Deserializer, Serialize};

/// Path of the full-text search endpoint under the provider base URL.
const EVERYTHING_PATH: &str = "everything";

/// Article as returned by the provider; unknown fields are ignored.
///
/// Null and missing strings decode as empty so one bad entry never fails a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Publication timestamp, verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    /// Short description; may be absent or null.
    #[serde(default)]
    pub description: Option<String>,
    /// Article URL.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Optional lead image URL.
    #[serde(default)]
    pub url_to_image: Option<String>,
}

impl Article {
    /// Description when present and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|value| !value.is_empty())
    }

    /// Image URL when present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.url_to_image.as_deref().filter(|value| !value.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Query sent to the provider, built fresh for each call.
#[derive(Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub keywords: String,
    pub api_key: String,
    pub domains: Option<String>,
    pub exclude_domains: Option<String>,
}

impl NewsQuery {
    /// Combine keywords with the current parameter values.
    pub fn from_settings(keywords: impl Into<String>, settings: &NewsApiSettings) -> Self {
        Self {
            keywords: keywords.into(),
            api_key: settings.api_key.clone(),
            domains: settings.domains().map(str::to_string),
            exclude_domains: settings.exclude_domains().map(str::to_string),
        }
    }

    /// Query string pairs; empty domain filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("apiKey", self.api_key.as_str())];
        if let Some(domains) = self.domains.as_deref().filter(|value| !value.is_empty()) {
            pairs.push(("domains", domains));
        }
        if let Some(exclude) = self
            .exclude_domains
            .as_deref()
            .filter(|value| !value.is_empty())
        {
            pairs.push(("excludeDomains", exclude));
        }
        pairs.push(("q", self.keywords.as_str()));
        pairs
    }
}

impl std::fmt::Debug for NewsQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsQuery")
            .field("keywords", &self.keywords)
            .field("api_key", &"[REDACTED]")
            .field("domains", &self.domains)
            .field("exclude_domains", &self.exclude_domains)
            .finish()
    }
}

/// Failures talking to the news provider.
///
/// Each variant displays the underlying message as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsProviderError {
    /// Transport failure with its cause chain; never carries the request URL.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response, with the provider's message when it sent one.
    #[error("Request failed with status code {status}{}", status_detail(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// Body was not the expected JSON shape.
    #[error("{0}")]
    Decode(String),
}

impl NewsProviderError {
    /// Transport error rendered without the URL, whose query holds the API key.
    fn network(err: reqwest::Error, api_key: &str) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        if !api_key.is_empty() {
            message = message.replace(api_key, "[REDACTED]");
        }
        Self::Network(message)
    }
}

fn status_detail(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

/// Provider interface for news search.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Run one full-text search and return the articles in provider order.
    async fn everything(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsProviderError>;
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the newsapi.org `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NewsApiClient {
    /// Create a client rooted at `base_url` (e.g. `https://newsapi.org/v2`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a client for the base URL in the settings.
    pub fn from_settings(settings: &NewsApiSettings) -> Self {
        Self::new(settings.base_url.clone())
    }

    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, EVERYTHING_PATH)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn everything(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsProviderError> {
        let url = self.endpoint();
        debug!(
            "requesting news (url={}, keywords_len={}, domains_set={}, exclude_set={})",
            url,
            query.keywords.len(),
            query.domains.is_some(),
            query.exclude_domains.is_some()
        );

        let response = self
            .client
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|err| NewsProviderError::network(err, &query.api_key))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| NewsProviderError::network(err, &query.api_key))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .ok()
                .and_then(|body| body.message);
            warn!("news provider rejected request (status={})", status.as_u16());
            return Err(NewsProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: EverythingResponse = serde_json::from_str(&body)
            .map_err(|err| NewsProviderError::Decode(err.to_string()))?;
        debug!("news response decoded (articles={})", payload.articles.len());
        Ok(payload.articles)
    }
}
