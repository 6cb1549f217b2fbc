// ABOUTME: FnTool - a closure-backed Tool for stateless capabilities.
// ABOUTME: Avoids a struct + impl Tool for simple async functions.

use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::{Arguments, Tool, ToolParameter};

type Handler = Box<dyn Fn(Arguments) -> BoxFuture<'static, anyhow::Result<String>> + Send + Sync>;

/// A tool whose execution is an async closure.
///
/// For tools that need shared state, implement [`Tool`] on a struct instead.
pub struct FnTool {
    name: String,
    description: String,
    parameters: Vec<ToolParameter>,
    handler: Handler,
}

impl FnTool {
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            handler: Box::new(
                move |args: Arguments| -> BoxFuture<'static, anyhow::Result<String>> {
                    Box::pin(handler(args))
                },
            ),
        }
    }

    /// Declare a parameter.
    pub fn with_parameter(mut self, parameter: ToolParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Declare several parameters, in order.
    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = ToolParameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        self.parameters.clone()
    }

    async fn execute(&self, arguments: Arguments) -> Result<String, anyhow::Error> {
        (self.handler)(arguments).await
    }
}
