//! Core types for the Thought/Action/Observation protocol.

use crate::parser::extract_thought;
use serde::{Deserialize, Serialize};

/// A callable capability offered to the model.
///
/// Names are expected to be unique within a [`Toolset`](crate::tools::Toolset);
/// this is not checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Name the model uses after `Action:`.
    pub name: String,
    /// One-line description shown in the prompt.
    pub description: String,
}

impl Tool {
    /// Creates a new tool.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Classification of a single model turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The model finished with a final answer.
    FinalAnswer {
        /// Text after the last `Final Answer:` marker, trimmed.
        answer: String,
    },
    /// The model asked for a tool to be run.
    ActionRequest {
        /// Requested tool name.
        action: String,
        /// Input for the tool.
        input: String,
    },
    /// The turn matched neither form.
    Malformed {
        /// The unmodified model output.
        raw: String,
        /// Corrective guidance to show the model on the next turn.
        message: String,
    },
}

impl TurnOutcome {
    /// Returns `true` for [`TurnOutcome::FinalAnswer`].
    #[must_use]
    pub fn is_final_answer(&self) -> bool {
        matches!(self, Self::FinalAnswer { .. })
    }

    /// Returns `true` for [`TurnOutcome::ActionRequest`].
    #[must_use]
    pub fn is_action_request(&self) -> bool {
        matches!(self, Self::ActionRequest { .. })
    }

    /// Returns `true` for [`TurnOutcome::Malformed`].
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// One completed action turn: what the model asked for and what came back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    /// Reasoning line that preceded the action, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<String>,
    /// Tool name that was requested.
    pub action: String,
    /// Input passed to the tool.
    pub action_input: String,
    /// Raw model text for the turn, replayed verbatim into the scratchpad.
    pub log: String,
    /// Result of running the action.
    pub observation: String,
}

impl ActionStep {
    /// Builds a step from the raw text of a parsed action turn and its result.
    ///
    /// The thought is taken from `raw` the same way [`parse`](crate::parser::parse)
    /// finds it.
    pub fn from_request(
        raw: impl Into<String>,
        action: impl Into<String>,
        action_input: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        let log = raw.into();
        Self {
            thought: extract_thought(&log).map(str::to_string),
            action: action.into(),
            action_input: action_input.into(),
            log,
            observation: observation.into(),
        }
    }

    /// Renders this step as it appears in the scratchpad.
    #[must_use]
    pub fn render(&self, observation_prefix: &str, llm_prefix: &str) -> String {
        format!(
            "{}\n{observation_prefix}{}\n{llm_prefix}",
            self.log, self.observation
        )
    }
}

/// Ordered record of the action turns taken so far in a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    steps: Vec<ActionStep>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed step.
    pub fn push(&mut self, step: ActionStep) {
        self.steps.push(step);
    }

    /// Appends a step and returns the transcript, for chaining.
    #[must_use]
    pub fn with_step(mut self, step: ActionStep) -> Self {
        self.push(step);
        self
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Checks whether no step has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Concatenates every step's rendered form into the scratchpad text.
    #[must_use]
    pub fn scratchpad(&self, observation_prefix: &str, llm_prefix: &str) -> String {
        self.steps
            .iter()
            .map(|step| step.render(observation_prefix, llm_prefix))
            .collect()
    }
}

impl From<Vec<ActionStep>> for Transcript {
    fn from(steps: Vec<ActionStep>) -> Self {
        Self { steps }
    }
}
