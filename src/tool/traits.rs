// ABOUTME: Defines the Tool trait - the core abstraction for agent capabilities.
// ABOUTME: Tools have a name, description, declared parameters, and async execute.

use async_trait::async_trait;

use super::{Arguments, ToolParameter};

/// A tool that can be executed by an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the oracle.
    fn description(&self) -> &str;

    /// Returns the declared parameters, in order.
    fn parameters(&self) -> Vec<ToolParameter>;

    /// Execute the tool with validated arguments.
    async fn execute(&self, arguments: Arguments) -> Result<String, anyhow::Error>;
}
