//! React Protocol - prompt composer and turn parser for reason-then-act agents.
//!
//! A model is prompted with a fixed instruction template, the tools it may
//! call and the transcript so far. Each turn it either requests an action
//! (`Action:` / `Action Input:`) or ends the run (`Final Answer:`). This crate
//! renders that prompt and classifies the model's reply. Calling the model and
//! running the tool are left to the caller.
//!
//! # Features
//!
//! - **Prompt Composer**: deterministic template rendering with memoized tool lists
//! - **Turn Parser**: final-answer / action / malformed classification that never panics
//! - **Error Handling**: structured error hierarchy using `thiserror`
//! - **Configuration**: environment-based configuration with validation
//!
//! # Example
//!
//! ```rust
//! use react_protocol::{
//!     ActionStep, PromptComposer, Tool, Toolset, Transcript, TurnOutcome, parse,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tools = Toolset::new(vec![Tool::new("Search", "web search")]);
//! let mut transcript = Transcript::new();
//! let composer = PromptComposer::new();
//!
//! let _prompt = composer.render(&tools, &transcript, "What is 2+2?")?;
//!
//! let reply = " I should search\nAction: Search\nAction Input: 2+2";
//! if let TurnOutcome::ActionRequest { action, input } = parse(reply) {
//!     transcript.push(ActionStep::from_request(reply, action, input, "4"));
//! }
//!
//! let outcome = parse(" I now know the final answer\nFinal Answer: 4");
//! assert_eq!(outcome, TurnOutcome::FinalAnswer { answer: "4".to_string() });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use config::{ProtocolConfig, ProtocolConfigBuilder};
pub use error::{ConfigError, PromptError};
pub use parser::{MALFORMED_TURN_MESSAGE, TurnParser, parse};
pub use prompt::{PromptComposer, PromptTemplate};
pub use tools::Toolset;
pub use types::{ActionStep, Tool, Transcript, TurnOutcome};

/// Version of the protocol crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes logging, filtered by `RUST_LOG`.
///
/// This should be called once at the start of the application.
///
/// # Errors
///
/// Returns an error if a global tracing subscriber has already been set.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
}
