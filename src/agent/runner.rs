// ABOUTME: AgentLoop - drives the bounded think-act-observe state machine.
// ABOUTME: Consults the oracle, executes actions, folds observations into context.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::answer::{exhaustion_message, extract_final_answer, is_completion};
use super::context::build_context;
use super::state::{LoopStatus, StatusHandle};
use super::{AgentLoopConfig, AgentLoopState, Oracle, Step};
use crate::error::{AgentError, ConfigError};
use crate::hook::{HookEvent, HookRegistry};
use crate::tool::{Observation, ToolCall, ToolExecutor};

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The oracle finished, or the stop check fired. Holds the final answer.
    Finished(String),

    /// The iteration bound was reached. Holds the exhaustion message.
    Exhausted(String),

    /// The run failed. Holds the rendered error.
    Failed(String),
}

/// How `drive` ended without a fault.
enum Ending {
    Finished(String),
    Exhausted(String),
}

impl Ending {
    fn into_answer(self) -> String {
        match self {
            Self::Finished(answer) | Self::Exhausted(answer) => answer,
        }
    }
}

/// The agent control loop.
///
/// One `run` at a time per instance; independent instances share nothing
/// mutable beyond the registry behind their executors.
pub struct AgentLoop {
    oracle: Arc<dyn Oracle>,
    executor: ToolExecutor,
    config: AgentLoopConfig,
    hooks: Option<Arc<HookRegistry>>,

    state: AgentLoopState,
    iteration: usize,
    observations: Vec<Observation>,
    status: watch::Sender<LoopStatus>,
}

impl AgentLoop {
    /// Create a loop. Fails if the config does not validate.
    pub fn new(
        oracle: Arc<dyn Oracle>,
        executor: ToolExecutor,
        config: AgentLoopConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (status, _) = watch::channel(LoopStatus::default());

        Ok(Self {
            oracle,
            executor,
            config,
            hooks: None,
            state: AgentLoopState::Idle,
            iteration: 0,
            observations: Vec::new(),
            status,
        })
    }

    /// Attach lifecycle hooks.
    pub fn with_hooks(mut self, hooks: Arc<HookRegistry>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn config(&self) -> &AgentLoopConfig {
        &self.config
    }

    pub fn state(&self) -> &AgentLoopState {
        &self.state
    }

    /// Iterations started in the current or most recent run.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Observation history of the current or most recent run.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// A handle that reads state and iteration from other tasks.
    pub fn status(&self) -> StatusHandle {
        StatusHandle::new(self.status.subscribe())
    }

    /// Run the loop on `input` and return the final answer.
    ///
    /// Reaching the iteration bound is not an error: the exhaustion message
    /// is returned as the result. Oracle and executor faults are returned
    /// as-is, with the state left at `Error`.
    pub async fn run(&mut self, input: &str) -> Result<String, AgentError> {
        let run_id = Uuid::new_v4().to_string();

        self.iteration = 0;
        self.observations.clear();
        self.transition(AgentLoopState::Idle);

        info!(
            run_id = %run_id,
            max_iterations = self.config.max_iterations,
            "starting agent run"
        );
        self.emit(|| HookEvent::RunStart {
            run_id: run_id.clone(),
            input: input.to_string(),
        })
        .await;

        let result = self.drive(&run_id, input).await;

        let outcome = match &result {
            Ok(Ending::Finished(answer)) => RunOutcome::Finished(answer.clone()),
            Ok(Ending::Exhausted(message)) => RunOutcome::Exhausted(message.clone()),
            Err(e) => RunOutcome::Failed(e.to_string()),
        };
        match &outcome {
            RunOutcome::Finished(_) => {
                info!(run_id = %run_id, iterations = self.iteration, "agent run finished")
            }
            RunOutcome::Exhausted(_) => warn!(
                run_id = %run_id,
                iterations = self.iteration,
                "agent run reached its iteration limit"
            ),
            RunOutcome::Failed(error) => warn!(
                run_id = %run_id,
                iterations = self.iteration,
                error = %error,
                "agent run failed"
            ),
        }
        self.emit(|| HookEvent::RunEnd {
            run_id: run_id.clone(),
            iterations: self.iteration,
            outcome: outcome.clone(),
        })
        .await;

        result.map(Ending::into_answer)
    }

    async fn drive(&mut self, run_id: &str, input: &str) -> Result<Ending, AgentError> {
        let mut current_input = input.to_string();

        while self.iteration < self.config.max_iterations {
            self.iteration += 1;
            self.transition(AgentLoopState::Thinking);
            self.emit(|| HookEvent::Iteration {
                run_id: run_id.to_string(),
                iteration: self.iteration,
            })
            .await;

            let context = build_context(&current_input, &self.observations);
            let Step { thought, action } = match self.oracle.think(&context).await {
                Ok(step) => step,
                Err(e) => return Err(self.fail(AgentError::Oracle(e))),
            };
            self.emit(|| HookEvent::ThoughtProduced {
                run_id: run_id.to_string(),
                iteration: self.iteration,
                thought: thought.clone(),
            })
            .await;

            let Some(action) = action else {
                self.transition(AgentLoopState::Finished);
                return Ok(Ending::Finished(extract_final_answer(&thought)));
            };

            self.transition(AgentLoopState::Acting);
            let call = match ToolCall::try_from(&action) {
                Ok(call) => call,
                Err(e) => return Err(self.fail(e.into())),
            };
            self.emit(|| HookEvent::PreToolUse {
                run_id: run_id.to_string(),
                call: call.clone(),
            })
            .await;

            let observation = match self.executor.execute(&call).await {
                Ok(observation) => observation,
                Err(e) => return Err(self.fail(e.into())),
            };
            current_input = observation.to_string();
            self.observations.push(observation);

            self.transition(AgentLoopState::Observing);
            self.emit(|| HookEvent::PostToolUse {
                run_id: run_id.to_string(),
                observation: self.observations[self.observations.len() - 1].clone(),
            })
            .await;

            if self.config.stop_on_finish && is_completion(&thought.reasoning) {
                debug!(run_id = %run_id, iteration = self.iteration, "completion marker in reasoning");
                self.transition(AgentLoopState::Finished);
                return Ok(Ending::Finished(extract_final_answer(&thought)));
            }
        }

        self.transition(AgentLoopState::Finished);
        Ok(Ending::Exhausted(exhaustion_message(self.config.max_iterations)))
    }

    fn fail(&mut self, error: AgentError) -> AgentError {
        self.transition(AgentLoopState::Error(error.to_string()));
        error
    }

    fn transition(&mut self, next: AgentLoopState) {
        debug!(from = %self.state, to = %next, iteration = self.iteration, "state transition");
        self.state = next;
        self.status.send_replace(LoopStatus {
            state: self.state.clone(),
            iteration: self.iteration,
        });
    }

    async fn emit(&self, event: impl FnOnce() -> HookEvent) {
        if let Some(hooks) = &self.hooks {
            hooks.fire(&event()).await;
        }
    }
}
