// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use tether::prelude::*;` to get started quickly.

pub use crate::agent::{
    Action, AgentLoop, AgentLoopConfig, AgentLoopState, LoopStatus, Oracle, RunOutcome,
    StatusHandle, Step, Thought,
};
pub use crate::error::{AgentError, ConfigError, ToolError};
pub use crate::hook::{Hook, HookEvent, HookRegistry};
pub use crate::tool::{
    ArgValue, Arguments, FnTool, Observation, Registry, Tool, ToolCall, ToolExecutor,
    ToolParameter, ToolSchema,
};
