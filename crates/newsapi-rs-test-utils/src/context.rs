use newsapi_rs_config::NewsApiSettings;
use newsapi_rs_protocol::EventSink;
use newsapi_rs_tools::{NewsProvider, ToolContext, ToolServices};
use std::sync::Arc;

pub fn test_settings() -> NewsApiSettings {
    NewsApiSettings {
        api_key: "test-key".to_string(),
        ..NewsApiSettings::default()
    }
}

pub fn base_tool_context() -> ToolContext {
    ToolContext::new(ToolServices {
        settings: test_settings(),
        news: None,
        event_sink: None,
    })
}

pub fn tool_context_with(
    settings: NewsApiSettings,
    news: Arc<dyn NewsProvider>,
    sink: Arc<dyn EventSink>,
) -> ToolContext {
    ToolContext::new(ToolServices {
        settings,
        news: Some(news),
        event_sink: Some(sink),
    })
}
