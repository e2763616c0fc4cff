//! Built-in function for news search.

use crate::builtins::utils::parse_args;
use crate::search::search_news;
use crate::{Tool, ToolContext};
use async_trait::async_trait;
use log::info;
use newsapi_rs_protocol::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Function searching the provider and reporting one article.
#[derive(Debug, Default)]
pub struct SearchNewsTool;

#[async_trait]
impl Tool for SearchNewsTool {
    fn name(&self) -> &str {
        "search_news"
    }

    fn description(&self) -> &str {
        "Search the latest news by keywords."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "keywords": {
                    "type": "string",
                    "description": "Keywords or phrases to search for in the article title and body.",
                },
            },
            "required": ["keywords"],
        })
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        let input: SearchNewsArgs = parse_args(args)?;
        let provider =
            ctx.services.news.as_ref().ok_or_else(|| {
                ToolError::ExecutionFailed("news provider not configured".to_string())
            })?;
        let outcome = search_news(provider.as_ref(), &ctx.services.settings, &input.keywords).await;
        let media_sets = outcome.media_sets();
        info!(
            "search_news finished (failed={}, media_sets={})",
            outcome.is_failure(),
            media_sets.len()
        );
        for medias in media_sets {
            ctx.send_medias(medias);
        }
        Ok(Value::String(outcome.to_string()))
    }
}

/// Arguments for SearchNewsTool.
#[derive(Debug, Serialize, Deserialize)]
struct SearchNewsArgs {
    keywords: String,
}

#[cfg(test)]
mod tests {
    use super::SearchNewsTool;
    use crate::news::{Article, NewsProvider, NewsProviderError};
    use crate::test_support::{FixedProvider, RecordingSink};
    use crate::{Tool, ToolContext, ToolServices};
    use newsapi_rs_config::NewsApiSettings;
    use newsapi_rs_protocol::{Media, ToolError};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn context(provider: Option<Arc<FixedProvider>>, sink: Arc<RecordingSink>) -> ToolContext {
        ToolContext::new(ToolServices {
            settings: NewsApiSettings::builder()
                .api_key("key")
                .build()
                .expect("settings"),
            news: provider.map(|provider| provider as Arc<dyn NewsProvider>),
            event_sink: Some(sink),
        })
    }

    #[tokio::test]
    async fn search_news_sends_link_and_image() {
        let provider = Arc::new(FixedProvider::new(Ok(vec![Article {
            published_at: "t".to_string(),
            description: Some("d".to_string()),
            url: "b".to_string(),
            url_to_image: Some("i".to_string()),
        }])));
        let sink = Arc::new(RecordingSink::default());
        let ctx = context(Some(provider.clone()), sink.clone());

        let result = SearchNewsTool
            .call(&ctx, json!({ "keywords": "rust" }))
            .await
            .expect("call");

        assert_eq!(
            result,
            json!("Latest news (t): d. Invite the user to open the article by clicking on the attached link.")
        );
        assert_eq!(
            sink.media_sets(),
            vec![vec![Media::link("b"), Media::image("i")]]
        );
        let queries = provider.queries.lock();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].keywords, "rust");
    }

    #[tokio::test]
    async fn search_news_reports_provider_error_as_text() {
        let provider = Arc::new(FixedProvider::new(Err(NewsProviderError::Network(
            "timeout".to_string(),
        ))));
        let sink = Arc::new(RecordingSink::default());
        let ctx = context(Some(provider), sink.clone());

        let result = SearchNewsTool
            .call(&ctx, json!({ "keywords": "rust" }))
            .await
            .expect("call");

        assert_eq!(result, json!("Error: timeout"));
        assert!(sink.media_sets().is_empty());
    }

    #[tokio::test]
    async fn search_news_errors_without_provider() {
        let sink = Arc::new(RecordingSink::default());
        let ctx = context(None, sink);
        let err = SearchNewsTool
            .call(&ctx, json!({ "keywords": "rust" }))
            .await
            .expect_err("missing provider");
        let ToolError::ExecutionFailed(message) = err else {
            panic!("expected execution failed");
        };
        assert_eq!(message, "news provider not configured");
    }

    #[tokio::test]
    async fn search_news_rejects_missing_keywords() {
        let sink = Arc::new(RecordingSink::default());
        let ctx = context(None, sink);
        let err = SearchNewsTool
            .call(&ctx, json!({ "query": "rust" }))
            .await
            .expect_err("bad args");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn schema_requires_keywords() {
        let spec = SearchNewsTool.spec();
        assert_eq!(spec.name, "search_news");
        assert_eq!(spec.args_schema["required"], json!(["keywords"]));
        assert!(SearchNewsTool.supports_parallel());
    }
}
