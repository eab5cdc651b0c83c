//! The fixed set of tools offered to the model for a run.

use crate::types::Tool;
use std::sync::OnceLock;

/// Ordered, immutable collection of tools.
///
/// The bracketed name list and the description block that go into the prompt
/// are computed on first use and reused afterwards.
#[derive(Default)]
pub struct Toolset {
    tools: Vec<Tool>,
    names: OnceLock<String>,
    descriptions: OnceLock<String>,
}

impl std::fmt::Debug for Toolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolset")
            .field(
                "tools",
                &self.tools.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Clone for Toolset {
    fn clone(&self) -> Self {
        Self::new(self.tools.clone())
    }
}

impl PartialEq for Toolset {
    fn eq(&self, other: &Self) -> bool {
        self.tools == other.tools
    }
}

impl Eq for Toolset {}

impl Toolset {
    /// Creates a toolset, keeping the given order.
    #[must_use]
    pub fn new(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            names: OnceLock::new(),
            descriptions: OnceLock::new(),
        }
    }

    /// Returns the tools in order.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Returns the number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Checks whether the toolset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Looks up a tool by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Checks whether a tool with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Tool names as a bracketed, comma-separated list, e.g. `[Search, Calculator]`.
    #[must_use]
    pub fn names(&self) -> &str {
        self.names.get_or_init(|| {
            let joined = self
                .tools
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{joined}]")
        })
    }

    /// One `name: description` line per tool.
    #[must_use]
    pub fn descriptions(&self) -> &str {
        self.descriptions.get_or_init(|| {
            self.tools
                .iter()
                .map(|t| format!("{}: {}", t.name, t.description))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Observation text for an action that names no tool in this set.
    #[must_use]
    pub fn invalid_tool_observation(&self, name: &str) -> String {
        format!("{name} is not a valid tool, try one of {}.", self.names())
    }
}

impl From<Vec<Tool>> for Toolset {
    fn from(tools: Vec<Tool>) -> Self {
        Self::new(tools)
    }
}

impl FromIterator<Tool> for Toolset {
    fn from_iter<I: IntoIterator<Item = Tool>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
