//! Function interfaces and the built-in News API functions.

pub mod builtins;
pub mod context;
pub mod extension;
pub mod news;
pub mod registry;
pub mod search;
pub mod tool;

#[cfg(test)]
mod test_support;

/// Built-in function registry and registration helper.
pub use builtins::{SearchNewsTool, builtin_tool_registry, register_builtin_tools};
/// Tool context and host services.
pub use context::{ToolContext, ToolServices};
/// Extension metadata and dispatch.
pub use extension::{Extension, ExtensionManifest};
/// News provider types.
pub use news::{Article, NewsApiClient, NewsProvider, NewsProviderError, NewsQuery};
/// Function registry type.
pub use registry::ToolRegistry;
/// Search function and its outcome.
pub use search::{MAX_ARTICLES, NO_NEWS_FOUND, SearchOutcome, search_news};
/// Tool trait and spec type.
pub use tool::{Tool, ToolSpec};
