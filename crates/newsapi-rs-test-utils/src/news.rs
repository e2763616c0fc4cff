use async_trait::async_trait;
use newsapi_rs_tools::{Article, NewsProvider, NewsProviderError, NewsQuery};
use parking_lot::Mutex;

pub fn article(
    published_at: &str,
    description: Option<&str>,
    url: &str,
    url_to_image: Option<&str>,
) -> Article {
    Article {
        published_at: published_at.to_string(),
        description: description.map(str::to_string),
        url: url.to_string(),
        url_to_image: url_to_image.map(str::to_string),
    }
}

/// Provider answering every query with the same canned response.
pub struct StubNewsProvider {
    response: Result<Vec<Article>, NewsProviderError>,
    queries: Mutex<Vec<NewsQuery>>,
}

impl StubNewsProvider {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            response: Ok(articles),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: NewsProviderError) -> Self {
        Self {
            response: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in call order.
    pub fn queries(&self) -> Vec<NewsQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl NewsProvider for StubNewsProvider {
    async fn everything(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsProviderError> {
        self.queries.lock().push(query.clone());
        self.response.clone()
    }
}
