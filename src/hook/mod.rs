// ABOUTME: Hook system for observing the agent loop lifecycle.
// ABOUTME: Provides events and a registry that fans them out to hooks.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::agent::{RunOutcome, Thought};
use crate::tool::{Observation, ToolCall};

/// Events fired by the agent loop.
#[derive(Debug, Clone)]
pub enum HookEvent {
    /// Fired when a run begins.
    RunStart { run_id: String, input: String },

    /// Fired at the start of each think-act iteration.
    Iteration { run_id: String, iteration: usize },

    /// Fired after the oracle returns.
    ThoughtProduced {
        run_id: String,
        iteration: usize,
        thought: Thought,
    },

    /// Fired before a tool call is handed to the executor.
    PreToolUse { run_id: String, call: ToolCall },

    /// Fired after an observation is appended to history.
    PostToolUse {
        run_id: String,
        observation: Observation,
    },

    /// Fired when a run ends, successfully or not.
    RunEnd {
        run_id: String,
        iterations: usize,
        outcome: RunOutcome,
    },
}

impl HookEvent {
    /// Event name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RunStart { .. } => "run_start",
            Self::Iteration { .. } => "iteration",
            Self::ThoughtProduced { .. } => "thought_produced",
            Self::PreToolUse { .. } => "pre_tool_use",
            Self::PostToolUse { .. } => "post_tool_use",
            Self::RunEnd { .. } => "run_end",
        }
    }

    pub fn run_id(&self) -> &str {
        match self {
            Self::RunStart { run_id, .. }
            | Self::Iteration { run_id, .. }
            | Self::ThoughtProduced { run_id, .. }
            | Self::PreToolUse { run_id, .. }
            | Self::PostToolUse { run_id, .. }
            | Self::RunEnd { run_id, .. } => run_id,
        }
    }
}

/// Trait for implementing hooks.
///
/// Hooks observe; they cannot alter or stop a run.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Called when an event occurs.
    async fn on_event(&self, event: &HookEvent);

    /// Optional: Filter which events this hook cares about.
    /// Default returns true for all events.
    fn accepts(&self, event: &HookEvent) -> bool {
        let _ = event;
        true
    }
}

/// Registry for managing and firing hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: RwLock<Vec<Arc<dyn Hook>>>,
}

impl HookRegistry {
    /// Create a new empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook.
    pub async fn register(&self, hook: impl Hook + 'static) {
        self.hooks.write().await.push(Arc::new(hook));
    }

    /// Register a hook wrapped in Arc.
    pub async fn register_arc(&self, hook: Arc<dyn Hook>) {
        self.hooks.write().await.push(hook);
    }

    /// Fire an event to every hook that accepts it, in registration order.
    pub async fn fire(&self, event: &HookEvent) {
        // Snapshot so the lock is not held while hooks run.
        let hooks = self.hooks.read().await.clone();
        for hook in hooks.iter().filter(|h| h.accepts(event)) {
            hook.on_event(event).await;
        }
    }

    /// Get the number of registered hooks.
    pub async fn len(&self) -> usize {
        self.hooks.read().await.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.hooks.read().await.is_empty()
    }

    /// Register a hook that only handles PreToolUse events.
    ///
    /// The callback receives (run_id, call).
    pub async fn on_tool_use<F>(&self, f: F)
    where
        F: Fn(&str, &ToolCall) + Send + Sync + 'static,
    {
        self.register(PreToolUseHook { callback: f }).await;
    }

    /// Register a hook that only handles RunEnd events.
    ///
    /// The callback receives (run_id, outcome).
    pub async fn on_run_end<F>(&self, f: F)
    where
        F: Fn(&str, &RunOutcome) + Send + Sync + 'static,
    {
        self.register(RunEndHook { callback: f }).await;
    }
}

/// Hook wrapper for PreToolUse events.
struct PreToolUseHook<F> {
    callback: F,
}

#[async_trait]
impl<F> Hook for PreToolUseHook<F>
where
    F: Fn(&str, &ToolCall) + Send + Sync,
{
    fn accepts(&self, event: &HookEvent) -> bool {
        matches!(event, HookEvent::PreToolUse { .. })
    }

    async fn on_event(&self, event: &HookEvent) {
        if let HookEvent::PreToolUse { run_id, call } = event {
            (self.callback)(run_id.as_str(), call);
        }
    }
}

/// Hook wrapper for RunEnd events.
struct RunEndHook<F> {
    callback: F,
}

#[async_trait]
impl<F> Hook for RunEndHook<F>
where
    F: Fn(&str, &RunOutcome) + Send + Sync,
{
    fn accepts(&self, event: &HookEvent) -> bool {
        matches!(event, HookEvent::RunEnd { .. })
    }

    async fn on_event(&self, event: &HookEvent) {
        if let HookEvent::RunEnd {
            run_id, outcome, ..
        } = event
        {
            (self.callback)(run_id.as_str(), outcome);
        }
    }
}
