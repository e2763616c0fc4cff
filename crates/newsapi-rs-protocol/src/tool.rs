/// Errors returned by extension functions and the registry.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Function name was not found in the registry.
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    /// Function received arguments that do not match its schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// Function execution failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
