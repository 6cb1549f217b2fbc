// ABOUTME: Defines the Observation type - the normalized outcome of a tool
// ABOUTME: call with content, originating tool, and string metadata.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata key holding the originating call identifier.
pub const CALL_ID_KEY: &str = "call_id";

/// Metadata key holding execution time in milliseconds.
pub const ELAPSED_MS_KEY: &str = "elapsed_ms";

/// Result of executing a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The output content.
    pub content: String,

    /// Name of the tool that produced this observation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,

    /// Correlation and execution details.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Observation {
    /// Create an observation not attributed to a tool.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_name: None,
            metadata: HashMap::new(),
        }
    }

    /// Create an observation produced by a tool.
    pub fn from_tool(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: Some(tool_name.into()),
            ..Self::new(content)
        }
    }

    /// Add metadata to the observation.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The identifier of the call that produced this observation.
    pub fn call_id(&self) -> Option<&str> {
        self.metadata.get(CALL_ID_KEY).map(String::as_str)
    }
}

/// Renders the observation the way it is folded into reasoning context.
impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tool_name {
            Some(name) => write!(f, "tool '{}' result: {}", name, self.content),
            None => f.write_str(&self.content),
        }
    }
}
