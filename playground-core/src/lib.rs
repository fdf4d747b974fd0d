//! # Playground Core
//!
//! The run-request orchestrator behind a multi-language code playground.
//! Owns language selection, editor text, and the lifecycle of runs
//! submitted to a remote execution service over HTTP: idle, running,
//! settled into output or a failure message.
//!
//! Frontends bind through [`SessionController`]: they send
//! [`SessionIntent`]s and render [`SessionSnapshot`]s, nothing else.

mod client;
mod config;
mod controller;
mod error;
mod orchestrator;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use client::{ExecutionBackend, HttpExecutionClient};
pub use config::{RunnerConfig, DEFAULT_BASE_URL};
pub use controller::{SessionController, SessionIntent, SessionSnapshot};
pub use error::Error;
pub use orchestrator::{RunOrchestrator, GENERIC_FAILURE_MESSAGE, NO_OUTPUT_PLACEHOLDER};
pub use session::{RunOutcome, SessionState, DEFAULT_CODE};
pub use types::{LanguageId, RunRequest, RunResult, SyntaxMode};

/// Result type for playground operations
pub type Result<T> = std::result::Result<T, Error>;
