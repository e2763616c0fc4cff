//! Tool trait definition and metadata spec.

use crate::context::ToolContext;
use async_trait::async_trait;
use newsapi_rs_protocol::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Function schema published to the host for discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// JSON schema for function arguments.
    #[serde(rename = "parameters")]
    pub args_schema: Value,
}

/// Interface for functions an extension exposes to the host.
#[async_trait]
pub trait Tool: Send + Sync + Debug {
    /// Return the function name.
    fn name(&self) -> &str;
    /// Return the function description.
    fn description(&self) -> &str;
    /// Return the JSON schema for function arguments.
    fn args_schema(&self) -> Value;

    /// Whether concurrent invocations are safe.
    fn supports_parallel(&self) -> bool {
        false
    }

    /// Invoke the function with a context and arguments.
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError>;

    /// Build a `ToolSpec` describing this function.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            args_schema: self.args_schema(),
        }
    }
}
