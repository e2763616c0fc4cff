//! The news search function and its boundary result type.

use crate::news::{Article, NewsProvider, NewsQuery};
use log::{info, warn};
use newsapi_rs_config::NewsApiSettings;
use newsapi_rs_protocol::Media;
use std::fmt;

/// Most articles surfaced per search; keeps spoken answers short.
pub const MAX_ARTICLES: usize = 1;
/// Returned when no article has a usable description.
pub const NO_NEWS_FOUND: &str = "No news found";
/// Separator between formatted entries.
const ENTRY_SEPARATOR: &str = "|";

/// Result of one search, rendered to the host as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one article qualified (never more than `MAX_ARTICLES`).
    Found(Vec<Article>),
    /// The provider answered but nothing qualified.
    NotFound,
    /// The provider call failed; carries the failure description.
    Failed(String),
}

impl SearchOutcome {
    /// Keep articles with a description, truncated to `MAX_ARTICLES`.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let kept: Vec<Article> = articles
            .into_iter()
            .filter(|article| article.description().is_some())
            .take(MAX_ARTICLES)
            .collect();
        if kept.is_empty() {
            Self::NotFound
        } else {
            Self::Found(kept)
        }
    }

    /// Media to deliver, one set per surfaced article.
    pub fn media_sets(&self) -> Vec<Vec<Media>> {
        let Self::Found(articles) = self else {
            return Vec::new();
        };
        articles.iter().map(article_medias).collect()
    }

    /// Whether the provider call failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(articles) => {
                let entries: Vec<String> = articles.iter().map(format_article).collect();
                f.write_str(&entries.join(ENTRY_SEPARATOR))
            }
            Self::NotFound => f.write_str(NO_NEWS_FOUND),
            Self::Failed(message) => write!(f, "Error: {message}"),
        }
    }
}

fn article_medias(article: &Article) -> Vec<Media> {
    let mut medias = vec![Media::link(&article.url)];
    if let Some(image) = article.image_url() {
        medias.push(Media::image(image));
    }
    medias
}

fn format_article(article: &Article) -> String {
    format!(
        "Latest news ({}): {}. Invite the user to open the article by clicking on the attached link.",
        article.published_at,
        article.description().unwrap_or_default()
    )
}

/// Search the provider once and reduce the response to an outcome.
///
/// Provider failures never escape; they become `SearchOutcome::Failed`.
pub async fn search_news(
    provider: &dyn NewsProvider,
    settings: &NewsApiSettings,
    keywords: &str,
) -> SearchOutcome {
    let query = NewsQuery::from_settings(keywords, settings);
    info!(
        "news search (keywords_len={}, domains_set={}, exclude_set={})",
        keywords.len(),
        query.domains.is_some(),
        query.exclude_domains.is_some()
    );
    match provider.everything(&query).await {
        Ok(articles) => SearchOutcome::from_articles(articles),
        Err(err) => {
            warn!("news search failed: {err}");
            SearchOutcome::Failed(err.to_string())
        }
    }
}
