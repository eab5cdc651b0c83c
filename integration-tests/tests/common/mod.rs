//! Shared test utilities for integration tests.
//!
//! Provides a scripted stand-in for a language model and a minimal driver
//! loop so tests can run full Thought/Action/Observation cycles.

#![allow(dead_code)]

use anyhow::{Result, bail};
use react_protocol::{ActionStep, PromptComposer, Tool, Toolset, Transcript, TurnOutcome, parse};
use std::collections::VecDeque;

/// Model stand-in that replays canned replies and records every prompt it saw.
pub struct ScriptedModel {
    replies: VecDeque<String>,
    /// Prompts received, in call order.
    pub prompts: Vec<String>,
}

impl ScriptedModel {
    /// Creates a model that answers with `replies` in order.
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| (*r).to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns the next reply, recording the prompt.
    pub fn complete(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(reply) => Ok(reply),
            None => bail!("scripted model ran out of replies"),
        }
    }
}

/// Tools used across the integration tests.
pub fn sample_toolset() -> Toolset {
    Toolset::new(vec![
        Tool::new("Search", "web search"),
        Tool::new("Calculator", "evaluates arithmetic expressions"),
    ])
}

/// Fake tool execution.
pub fn run_tool(action: &str, input: &str) -> String {
    match action {
        "Calculator" if input == "2+2" => "4".to_string(),
        "Search" => format!("results for {input}"),
        _ => "no result".to_string(),
    }
}

/// Outcome of a driven run.
pub struct RunResult {
    /// Final answer text.
    pub answer: String,
    /// Transcript at completion.
    pub transcript: Transcript,
}

/// Drives the model until it gives a final answer or `max_turns` is reached.
pub fn drive(
    model: &mut ScriptedModel,
    composer: &PromptComposer,
    tools: &Toolset,
    question: &str,
    max_turns: usize,
) -> Result<RunResult> {
    let mut transcript = Transcript::new();

    for turn in 1..=max_turns {
        let prompt = composer.render(tools, &transcript, question)?;
        let reply = model.complete(&prompt)?;

        let outcome = parse(&reply);
        tracing::debug!(turn, ?outcome, "Scripted turn parsed");

        match outcome {
            TurnOutcome::FinalAnswer { answer } => {
                return Ok(RunResult { answer, transcript });
            }
            TurnOutcome::ActionRequest { action, input } => {
                let observation = if tools.contains(&action) {
                    run_tool(&action, &input)
                } else {
                    tools.invalid_tool_observation(&action)
                };
                transcript.push(ActionStep::from_request(reply, action, input, observation));
            }
            TurnOutcome::Malformed { raw, message } => {
                transcript.push(ActionStep::from_request(raw, "_Exception", "", message));
            }
        }
    }

    bail!("no final answer after {max_turns} turns")
}
