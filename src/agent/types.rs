// ABOUTME: Thought and Action - what the oracle produces each iteration.
// ABOUTME: Actions convert into ToolCalls for the executor.

use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::tool::{ArgValue, Arguments, ToolCall};

/// The oracle's reasoning output for one iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub reasoning: String,

    #[serde(default)]
    pub plan: Vec<String>,

    /// Free-text next step, e.g. `finish(answer="42")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl Thought {
    pub fn new(reasoning: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            ..Default::default()
        }
    }

    /// Set the plan steps.
    pub fn with_plan<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plan = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the next action text.
    pub fn with_next_action(mut self, next_action: impl Into<String>) -> Self {
        self.next_action = Some(next_action.into());
        self
    }
}

/// A requested tool invocation.
///
/// Arguments are not checked here; validation happens when the call is
/// executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub tool_name: String,

    #[serde(default)]
    pub arguments: Arguments,

    /// The thought that produced this action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<Thought>,
}

impl Action {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Arguments::new(),
            thought: None,
        }
    }

    /// Add one argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(name, value);
        self
    }

    /// Replace all arguments.
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Attach the originating thought.
    pub fn with_thought(mut self, thought: Thought) -> Self {
        self.thought = Some(thought);
        self
    }
}

impl TryFrom<&Action> for ToolCall {
    type Error = ToolError;

    fn try_from(action: &Action) -> Result<Self, Self::Error> {
        let raw = serde_json::to_string(&action.arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        Ok(ToolCall::new(&action.tool_name, raw))
    }
}
