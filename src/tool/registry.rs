// ABOUTME: Implements the Registry - a thread-safe container for discovering
// ABOUTME: and managing available tools at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{Tool, ToolSchema};

/// A thread-safe registry of tools.
///
/// Clones share the same underlying map. Registering a name that already
/// exists replaces the previous tool.
#[derive(Default)]
pub struct Registry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    pub async fn register<T: Tool + 'static>(&self, tool: T) {
        self.register_arc(Arc::new(tool)).await;
    }

    /// Register a tool from an Arc.
    pub async fn register_arc(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().await;
        insert(&mut tools, tool);
    }

    /// Register several tools under a single write lock.
    pub async fn register_all<I>(&self, tools: I)
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut map = self.tools.write().await;
        for tool in tools {
            insert(&mut map, tool);
        }
    }

    /// Remove a tool by name, returning it if it was registered.
    pub async fn remove(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let mut tools = self.tools.write().await;
        let removed = tools.remove(name);
        if removed.is_some() {
            debug!(tool = name, "removed tool");
        }
        removed
    }

    /// Remove every tool.
    pub async fn clear(&self) {
        let mut tools = self.tools.write().await;
        tools.clear();
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// Check whether a tool is registered.
    pub async fn contains(&self, name: &str) -> bool {
        let tools = self.tools.read().await;
        tools.contains_key(name)
    }

    /// List all tool names, sorted alphabetically.
    pub async fn names(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<_> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools, sorted by name.
    pub async fn all(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        let mut all: Vec<_> = tools.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    /// Get the number of registered tools.
    pub async fn count(&self) -> usize {
        let tools = self.tools.read().await;
        tools.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.count().await == 0
    }

    /// Export schema descriptors for every tool, sorted by name.
    pub async fn export_schema(&self) -> Vec<ToolSchema> {
        let tools = self.tools.read().await;
        let mut schemas: Vec<_> = tools
            .values()
            .map(|t| ToolSchema::from_tool(t.as_ref()))
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }
}

fn insert(tools: &mut HashMap<String, Arc<dyn Tool>>, tool: Arc<dyn Tool>) {
    let name = tool.name().to_string();
    if tools.insert(name.clone(), tool).is_some() {
        warn!(tool = %name, "replaced existing tool with the same name");
    } else {
        debug!(tool = %name, "registered tool");
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            tools: Arc::clone(&self.tools),
        }
    }
}
