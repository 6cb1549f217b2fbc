// ABOUTME: AgentLoopState and the read-only StatusHandle for observing a
// ABOUTME: running loop from other tasks.

use std::fmt;

use tokio::sync::watch;

/// Phase of the agent loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AgentLoopState {
    #[default]
    Idle,
    Thinking,
    Acting,
    Observing,
    Finished,
    /// The run failed; holds the rendered cause.
    Error(String),
}

impl AgentLoopState {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Error(_))
    }
}

impl fmt::Display for AgentLoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Thinking => f.write_str("thinking"),
            Self::Acting => f.write_str("acting"),
            Self::Observing => f.write_str("observing"),
            Self::Finished => f.write_str("finished"),
            Self::Error(cause) => write!(f, "error: {cause}"),
        }
    }
}

/// Snapshot of a loop's state and iteration counter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoopStatus {
    pub state: AgentLoopState,
    pub iteration: usize,
}

/// Cloneable, read-only view of a loop's progress.
#[derive(Debug, Clone)]
pub struct StatusHandle {
    rx: watch::Receiver<LoopStatus>,
}

impl StatusHandle {
    pub(crate) fn new(rx: watch::Receiver<LoopStatus>) -> Self {
        Self { rx }
    }

    pub fn snapshot(&self) -> LoopStatus {
        self.rx.borrow().clone()
    }

    pub fn state(&self) -> AgentLoopState {
        self.rx.borrow().state.clone()
    }

    pub fn iteration(&self) -> usize {
        self.rx.borrow().iteration
    }

    /// Wait for the next status change. Returns false once the loop is dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!AgentLoopState::Idle.is_terminal());
        assert!(!AgentLoopState::Observing.is_terminal());
        assert!(AgentLoopState::Finished.is_terminal());
        assert!(AgentLoopState::Error("boom".into()).is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(AgentLoopState::Thinking.to_string(), "thinking");
        assert_eq!(AgentLoopState::Error("boom".into()).to_string(), "error: boom");
    }

    #[tokio::test]
    async fn test_handle_sees_updates() {
        let (tx, rx) = watch::channel(LoopStatus::default());
        let mut handle = StatusHandle::new(rx);
        assert_eq!(handle.state(), AgentLoopState::Idle);

        tx.send_replace(LoopStatus {
            state: AgentLoopState::Acting,
            iteration: 2,
        });
        assert!(handle.changed().await);
        assert_eq!(handle.state(), AgentLoopState::Acting);
        assert_eq!(handle.iteration(), 2);

        drop(tx);
        assert!(!handle.changed().await);
    }
}
