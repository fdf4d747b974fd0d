use crate::types::LanguageId;

/// Code the editor starts out with
pub const DEFAULT_CODE: &str = "print('Hello, world!')";

/// State of the most recent run attempt. `Idle` is the initial state only;
/// both settled states stick until the next run overwrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Idle,
    Running,
    Succeeded(String),
    Failed(String),
}

impl RunOutcome {
    pub fn is_running(&self) -> bool {
        matches!(self, RunOutcome::Running)
    }
}

/// Editor and run state for one user session. Created once per session and
/// mutated only by frontend input and the run orchestrator.
#[derive(Debug, Clone)]
pub struct SessionState {
    language: LanguageId,
    code: String,
    outcome: RunOutcome,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            language: LanguageId::Python,
            code: DEFAULT_CODE.to_string(),
            outcome: RunOutcome::Idle,
        }
    }
}

impl SessionState {
    pub fn new(language: LanguageId, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            outcome: RunOutcome::Idle,
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    /// Replaces the selected language; code and outcome are untouched
    pub fn set_language(&mut self, language: LanguageId) {
        self.language = language;
    }

    /// Replaces the code text verbatim; outcome is untouched
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Enters `Running`, discarding any previous output or message
    pub(crate) fn begin_run(&mut self) {
        self.outcome = RunOutcome::Running;
    }

    pub(crate) fn complete_run(&mut self, output: String) {
        self.outcome = RunOutcome::Succeeded(output);
    }

    pub(crate) fn fail_run(&mut self, message: String) {
        self.outcome = RunOutcome::Failed(message);
    }
}
