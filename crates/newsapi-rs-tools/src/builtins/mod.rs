//! Built-in functions bundled with the extension.

mod news;
mod utils;

use crate::ToolRegistry;
use log::info;
use std::sync::Arc;

pub use news::SearchNewsTool;

/// Register all built-in functions with the provided registry.
pub fn register_builtin_tools(registry: &ToolRegistry) {
    registry.register(Arc::new(SearchNewsTool));
    info!("registered built-in tools");
}

/// Build a registry pre-populated with built-in functions.
pub fn builtin_tool_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_builtin_tools(&registry);
    registry
}
