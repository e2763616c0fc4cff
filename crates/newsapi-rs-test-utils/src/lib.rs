//! Test helpers shared across News API extension crates.

pub mod context;
pub mod events;
pub mod news;
pub mod tools;

pub use context::{base_tool_context, test_settings, tool_context_with};
pub use events::RecordingSink;
pub use news::{StubNewsProvider, article};
pub use tools::DummyTool;
