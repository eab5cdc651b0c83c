//! Prompt building for the Thought/Action/Observation protocol.
//!
//! [`PromptTemplate`] holds static text with `{name}` placeholders.
//! [`PromptComposer`] fills the standard placeholders from a toolset, a
//! transcript and the user's question.

use crate::config::ProtocolConfig;
use crate::error::PromptError;
use crate::tools::Toolset;
use crate::types::Transcript;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder for the user's question.
pub const INPUT: &str = "input";

/// Placeholder for the rendered transcript.
pub const AGENT_SCRATCHPAD: &str = "agent_scratchpad";

/// Placeholder for the bracketed tool name list.
pub const BOXCAR_NAMES: &str = "boxcar_names";

/// Placeholder for the `name: description` lines.
pub const BOXCAR_DESCRIPTIONS: &str = "boxcar_descriptions";

const REACT_TEMPLATE: &str = "Answer the following questions as best you can. You have access to the following tools:

{boxcar_descriptions}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one from this list: {boxcar_names}
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {input}
Thought:{agent_scratchpad}";

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}") {
        Ok(regex) => regex,
        Err(e) => panic!("regex pattern should be valid at compile time: {e}"),
    }
});

/// Static prompt text with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: Cow<'static, str>,
    placeholders: Vec<String>,
}

impl PromptTemplate {
    /// Creates a template. Only `{name}` tokens whose name is listed in
    /// `placeholders` are substituted; other braces are left as they are.
    #[must_use]
    pub fn new<I, S>(text: impl Into<Cow<'static, str>>, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            placeholders: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard reason-then-act instruction template.
    #[must_use]
    pub fn react() -> Self {
        Self::new(
            REACT_TEMPLATE,
            [INPUT, AGENT_SCRATCHPAD, BOXCAR_NAMES, BOXCAR_DESCRIPTIONS],
        )
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the declared placeholder names in order.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitutes placeholder values in a single pass.
    ///
    /// Values are inserted as-is; a value containing `{input}` stays literal.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingPlaceholder`] naming the first declared
    /// placeholder that has no value.
    pub fn format(&self, values: &HashMap<&str, String>) -> Result<String, PromptError> {
        if let Some(key) = self
            .placeholders
            .iter()
            .find(|key| !values.contains_key(key.as_str()))
        {
            return Err(PromptError::MissingPlaceholder { key: key.clone() });
        }

        let mut rendered = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER_PATTERN.captures_iter(&self.text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !self.placeholders.iter().any(|p| p == name.as_str()) {
                continue;
            }
            if let Some(value) = values.get(name.as_str()) {
                rendered.push_str(&self.text[last..whole.start()]);
                rendered.push_str(value);
                last = whole.end();
            }
        }

        rendered.push_str(&self.text[last..]);
        Ok(rendered)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::react()
    }
}

/// Renders the prompt for the next model turn.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    template: PromptTemplate,
    config: ProtocolConfig,
}

impl PromptComposer {
    /// Creates a composer using the standard template and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given configuration for scratchpad prefixes and stop sequences.
    #[must_use]
    pub fn with_config(mut self, config: ProtocolConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the instruction template.
    #[must_use]
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Returns the template in use.
    #[must_use]
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Sequences the model should stop at so it does not invent observations.
    #[must_use]
    pub fn stop_sequences(&self) -> &[String] {
        &self.config.stop_sequences
    }

    /// Renders the prompt from the toolset, the transcript so far and the question.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingPlaceholder`] if the template declares a
    /// placeholder other than the four standard ones.
    pub fn render(
        &self,
        toolset: &Toolset,
        transcript: &Transcript,
        question: &str,
    ) -> Result<String, PromptError> {
        let scratchpad =
            transcript.scratchpad(&self.config.observation_prefix, &self.config.llm_prefix);

        let values = HashMap::from([
            (INPUT, question.to_string()),
            (AGENT_SCRATCHPAD, scratchpad),
            (BOXCAR_NAMES, toolset.names().to_string()),
            (BOXCAR_DESCRIPTIONS, toolset.descriptions().to_string()),
        ]);

        tracing::trace!(
            tools = toolset.len(),
            steps = transcript.len(),
            "Rendering prompt"
        );
        self.template.format(&values)
    }
}
