// ABOUTME: ToolExecutor - resolves a tool call against the registry, parses and
// ABOUTME: validates its arguments, runs the tool, and returns an Observation.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::observation::{CALL_ID_KEY, ELAPSED_MS_KEY};
use super::{ArgValue, Arguments, Observation, Registry, ToolParameter};
use crate::error::ToolError;

/// A request to invoke a tool with a raw JSON argument payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Correlation id, copied into the resulting observation's metadata.
    pub id: String,
    pub tool_name: String,
    /// JSON object text, parsed at execution time.
    pub raw_arguments: String,
}

impl ToolCall {
    /// Create a call with a freshly generated id.
    pub fn new(tool_name: impl Into<String>, raw_arguments: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool_name: tool_name.into(),
            raw_arguments: raw_arguments.into(),
        }
    }

    /// Override the call id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Executes tool calls against a shared [`Registry`].
///
/// Holds no state between calls beyond the registry handle.
#[derive(Clone, Default)]
pub struct ToolExecutor {
    registry: Registry,
}

impl ToolExecutor {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute a single call.
    pub async fn execute(&self, call: &ToolCall) -> Result<Observation, ToolError> {
        debug!(call_id = %call.id, tool = %call.tool_name, "executing tool call");

        let result = self.execute_call(call).await;
        if let Err(e) = &result {
            warn!(
                call_id = %call.id,
                tool = %call.tool_name,
                kind = e.kind(),
                error = %e,
                "tool call failed"
            );
        }
        result
    }

    /// Execute calls one after another in input order.
    ///
    /// Stops at the first failing call and returns its error; later calls
    /// are not run.
    pub async fn execute_all(&self, calls: &[ToolCall]) -> Result<Vec<Observation>, ToolError> {
        let mut observations = Vec::with_capacity(calls.len());
        for call in calls {
            observations.push(self.execute(call).await?);
        }
        Ok(observations)
    }

    async fn execute_call(&self, call: &ToolCall) -> Result<Observation, ToolError> {
        let tool = self
            .registry
            .get(&call.tool_name)
            .await
            .ok_or_else(|| ToolError::NotFound(call.tool_name.clone()))?;

        let arguments = parse_arguments(&call.raw_arguments)?;
        validate_arguments(&tool.parameters(), &arguments)?;

        let started = Instant::now();
        let content = tool
            .execute(arguments)
            .await
            .map_err(|source| ToolError::ExecutionFailed {
                tool: tool.name().to_string(),
                message: source.to_string(),
                source,
            })?;

        Ok(Observation::from_tool(tool.name(), content)
            .with_metadata(CALL_ID_KEY, call.id.clone())
            .with_metadata(ELAPSED_MS_KEY, started.elapsed().as_millis().to_string()))
    }
}

/// Parse a raw payload into an argument map.
pub fn parse_arguments(raw: &str) -> Result<Arguments, ToolError> {
    serde_json::from_str(raw)
        .map_err(|e| ToolError::InvalidArguments(format!("expected a JSON object: {e}")))
}

/// Check arguments against declared parameters.
///
/// Required-ness comes only from the declarations. All required parameters
/// are checked before any enum constraint.
pub fn validate_arguments(
    parameters: &[ToolParameter],
    arguments: &Arguments,
) -> Result<(), ToolError> {
    if let Some(missing) = parameters
        .iter()
        .find(|p| p.required && !arguments.contains(&p.name))
    {
        return Err(ToolError::MissingRequiredParameter(missing.name.clone()));
    }

    for param in parameters {
        let (Some(allowed), Some(ArgValue::String(value))) =
            (&param.enum_values, arguments.get(&param.name))
        else {
            continue;
        };
        if !param.allows(value) {
            return Err(ToolError::InvalidArguments(format!(
                "parameter '{}' must be one of [{}], got '{}'",
                param.name,
                allowed.join(", "),
                value
            )));
        }
    }

    Ok(())
}
