//! Turn parser for model output.
//!
//! Classifies one turn of model text as a final answer, an action request,
//! or malformed output. A `Final Answer:` marker anywhere in the text wins
//! over any action markers. The action pattern is compiled once on first use
//! through `std::sync::LazyLock`.
//!
//! Grammar:
//!
//! ```text
//! final answer:  ... "Final Answer:" <answer>
//! action:        "Action:" <name> "\n" "Action Input:" <input>
//! ```

use crate::config::ProtocolConfig;
use crate::types::TurnOutcome;
use regex::Regex;
use std::sync::LazyLock;

/// Marker that ends the run.
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Marker preceding the tool name.
pub const ACTION_MARKER: &str = "Action:";

/// Marker preceding the tool input.
pub const ACTION_INPUT_MARKER: &str = "Action Input:";

/// Guidance returned with every [`TurnOutcome::Malformed`].
pub const MALFORMED_TURN_MESSAGE: &str = "Could not parse your last response. Please try again. \
Reply with an `Action:` line followed by an `Action Input:` line, or finish with \
the exact marker `Final Answer:` followed by your answer.";

/// `Action:` name, at least one newline, `Action Input:` and the rest of the text.
static ACTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_unchecked(r"(?s)Action:\s*(.*?)\s*\n\s*Action Input:(.*)"));

fn compile_unchecked(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => panic!("regex pattern should be valid at compile time: {e}"),
    }
}

/// Classifies one turn of model output.
///
/// Never fails: output that fits neither form comes back as
/// [`TurnOutcome::Malformed`] carrying [`MALFORMED_TURN_MESSAGE`].
#[must_use]
pub fn parse(raw_text: &str) -> TurnOutcome {
    if let Some(idx) = raw_text.rfind(FINAL_ANSWER_MARKER) {
        let answer = raw_text[idx + FINAL_ANSWER_MARKER.len()..].trim();
        tracing::debug!(answer_len = answer.len(), "Parsed final answer");
        return TurnOutcome::FinalAnswer {
            answer: answer.to_string(),
        };
    }

    if let Some(thought) = extract_thought(raw_text) {
        tracing::debug!(thought, "Model thought");
    }

    let Some(caps) = ACTION_PATTERN.captures(raw_text) else {
        tracing::warn!(raw_len = raw_text.len(), "Model output matched no known form");
        return TurnOutcome::Malformed {
            raw: raw_text.to_string(),
            message: MALFORMED_TURN_MESSAGE.to_string(),
        };
    };

    let action = caps.get(1).map_or("", |m| last_action_segment(m.as_str()));
    let input = caps.get(2).map_or("", |m| strip_quotes(m.as_str().trim()));

    tracing::debug!(action, input_len = input.len(), "Parsed action request");
    TurnOutcome::ActionRequest {
        action: action.to_string(),
        input: input.to_string(),
    }
}

/// Trimmed text after the last `Action:` in the captured name.
fn last_action_segment(name: &str) -> &str {
    name.rfind(ACTION_MARKER)
        .map_or(name, |idx| &name[idx + ACTION_MARKER.len()..])
        .trim()
}

/// Returns the first non-empty line before the earliest `Action:` or
/// `Action Input:` marker, without a leading `Thought:` label.
pub(crate) fn extract_thought(raw_text: &str) -> Option<&str> {
    let cut = [ACTION_MARKER, ACTION_INPUT_MARKER]
        .iter()
        .filter_map(|marker| raw_text.find(marker))
        .min();
    let head = cut.map_or(raw_text, |idx| &raw_text[..idx]);

    let line = head.lines().map(str::trim).find(|l| !l.is_empty())?;
    let thought = line.strip_prefix("Thought:").unwrap_or(line).trim();
    (!thought.is_empty()).then_some(thought)
}

/// Removes exactly one pair of surrounding double quotes, if present.
fn strip_quotes(input: &str) -> &str {
    input
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(input)
}

/// Turn parser bound to a [`ProtocolConfig`].
///
/// Parsing behaves exactly like [`parse`]; the config only controls whether
/// outcomes are also reported at `info` level.
#[derive(Debug, Clone, Default)]
pub struct TurnParser {
    config: ProtocolConfig,
}

impl TurnParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub fn new(config: ProtocolConfig) -> Self {
        Self { config }
    }

    /// Classifies one turn of model output.
    #[must_use]
    pub fn parse(&self, raw_text: &str) -> TurnOutcome {
        let outcome = parse(raw_text);

        if self.config.verbose {
            match &outcome {
                TurnOutcome::FinalAnswer { answer } => {
                    tracing::info!("Final answer: {answer}");
                }
                TurnOutcome::ActionRequest { action, input } => {
                    tracing::info!("Action requested: {action} ({input})");
                }
                TurnOutcome::Malformed { .. } => {
                    tracing::info!("Malformed turn, asking model to retry");
                }
            }
        }

        outcome
    }
}
