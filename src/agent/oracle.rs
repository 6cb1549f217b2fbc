// ABOUTME: Defines the Oracle trait - the reasoning engine consulted once per
// ABOUTME: iteration, and the Step it returns.

use async_trait::async_trait;

use super::{Action, Thought};

/// One iteration's output from the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub thought: Thought,

    /// `None` means the oracle considers the task complete.
    pub action: Option<Action>,
}

impl Step {
    /// A step that ends the run.
    pub fn finish(thought: Thought) -> Self {
        Self {
            thought,
            action: None,
        }
    }

    /// A step that requests a tool invocation.
    pub fn act(thought: Thought, action: Action) -> Self {
        Self {
            thought,
            action: Some(action),
        }
    }
}

/// The external reasoning engine, e.g. a language model client.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Produce a thought and optional action for the given context.
    async fn think(&self, context: &str) -> Result<Step, anyhow::Error>;
}
