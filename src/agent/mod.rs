// ABOUTME: Agent loop module - the think-act-observe control loop.
// ABOUTME: Provides AgentLoop, its config and state, the Oracle seam, and answer helpers.

mod answer;
mod config;
mod context;
mod oracle;
mod runner;
mod state;
mod types;

pub use answer::{
    COMPLETION_MARKERS, exhaustion_message, extract_final_answer, is_completion,
    parse_finish_answer,
};
pub use config::AgentLoopConfig;
pub use context::build_context;
pub use oracle::{Oracle, Step};
pub use runner::{AgentLoop, RunOutcome};
pub use state::{AgentLoopState, LoopStatus, StatusHandle};
pub use types::{Action, Thought};
