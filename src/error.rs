// ABOUTME: Defines all error types for the tether library using thiserror.
// ABOUTME: Tool and config errors are unified under AgentError.

/// Top-level error type returned by [`AgentLoop::run`](crate::agent::AgentLoop::run).
///
/// Tool and oracle faults are transparent so that the caller of `run` sees
/// exactly the fault that was raised.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Oracle(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from resolving, validating, or executing a tool call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    #[error("Tool '{tool}' execution failed: {message}")]
    ExecutionFailed {
        tool: String,
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ToolError {
    /// Short machine-friendly label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::MissingRequiredParameter(_) => "missing_required_parameter",
            Self::ExecutionFailed { .. } => "execution_failed",
        }
    }
}

/// Errors from building or loading an [`AgentLoopConfig`](crate::agent::AgentLoopConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_iterations must be at least 1")]
    InvalidMaxIterations,

    #[error("temperature must be a finite, non-negative number (got {0})")]
    InvalidTemperature(f64),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
