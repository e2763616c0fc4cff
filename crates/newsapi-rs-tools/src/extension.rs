//! Extension metadata and function dispatch.

use crate::builtins::builtin_tool_registry;
use crate::context::ToolContext;
use crate::registry::ToolRegistry;
use crate::tool::ToolSpec;
use log::debug;
use newsapi_rs_config::{ParameterSpec, news_api_parameters};
use newsapi_rs_protocol::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static description consumed by the host's discovery and settings UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub name: String,
    pub website: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub features: Vec<String>,
    pub installation_steps: Vec<String>,
    pub instructions: Option<String>,
    pub parameters: Vec<ParameterSpec>,
    pub function_schemas: Vec<ToolSpec>,
}

/// A host plugin: metadata, declared parameters and callable functions.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    website: Option<String>,
    icon: Option<String>,
    category: Option<String>,
    features: Vec<String>,
    installation_steps: Vec<String>,
    instructions: Option<String>,
    parameters: Vec<ParameterSpec>,
    functions: ToolRegistry,
}

impl Extension {
    /// Create an extension with no metadata and no functions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: None,
            icon: None,
            category: None,
            features: Vec::new(),
            installation_steps: Vec::new(),
            instructions: None,
            parameters: Vec::new(),
            functions: ToolRegistry::new(),
        }
    }

    /// The News API extension with its built-in functions registered.
    pub fn news_api() -> Self {
        Self::new("News API")
            .with_website("https://newsapi.org/")
            .with_icon("https://newsapi.org/apple-touch-icon.png")
            .with_category("news")
            .with_features(["Search for the latest news."])
            .with_installation_steps([
                "[Register](https://newsapi.org/register) on the website.",
                "Copy the API key to setup the parameter or the environment variable `API_KEY`.",
            ])
            .with_parameters(news_api_parameters())
            .with_instructions(
                "You are a news anchor reporting live on a major breaking news story. \
                 Deliver the news with professionalism and clarity.",
            )
            .with_functions(builtin_tool_registry())
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_installation_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installation_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterSpec>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Replace the function registry.
    pub fn with_functions(mut self, functions: ToolRegistry) -> Self {
        self.functions = functions;
        self
    }

    /// Registry of callable functions.
    pub fn functions(&self) -> &ToolRegistry {
        &self.functions
    }

    /// Snapshot of the metadata for the host.
    pub fn manifest(&self) -> ExtensionManifest {
        ExtensionManifest {
            name: self.name.clone(),
            website: self.website.clone(),
            icon: self.icon.clone(),
            category: self.category.clone(),
            features: self.features.clone(),
            installation_steps: self.installation_steps.clone(),
            instructions: self.instructions.clone(),
            parameters: self.parameters.clone(),
            function_schemas: self.functions.specs(),
        }
    }

    /// Invoke a function by name through the context's event pipeline.
    pub async fn call(
        &self,
        ctx: &mut ToolContext,
        name: &str,
        args: Value,
    ) -> Result<Value, ToolError> {
        let tool = self
            .functions
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        debug!("dispatching function (extension={}, name={})", self.name, name);
        ctx.execute_tool(tool.as_ref(), args).await
    }
}
