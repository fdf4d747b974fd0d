use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Languages the playground can submit for execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Node,
    Go,
    Cpp,
}

impl LanguageId {
    /// Supported languages, in selector order
    pub const ALL: [LanguageId; 4] = [
        LanguageId::Python,
        LanguageId::Node,
        LanguageId::Go,
        LanguageId::Cpp,
    ];

    /// Identifier sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Node => "node",
            LanguageId::Go => "go",
            LanguageId::Cpp => "cpp",
        }
    }

    /// Human-readable name for language selectors
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::Node => "Node.js",
            LanguageId::Go => "Go",
            LanguageId::Cpp => "C++",
        }
    }
}

impl FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(LanguageId::Python),
            "node" => Ok(LanguageId::Node),
            "go" => Ok(LanguageId::Go),
            "cpp" => Ok(LanguageId::Cpp),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor highlighting mode derived from the selected language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    Python,
    Javascript,
    Go,
    Cpp,
    Plaintext,
}

impl SyntaxMode {
    /// Mode identifier understood by display editors
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxMode::Python => "python",
            SyntaxMode::Javascript => "javascript",
            SyntaxMode::Go => "go",
            SyntaxMode::Cpp => "cpp",
            SyntaxMode::Plaintext => "plaintext",
        }
    }

    /// Resolves a raw selector value to a mode. Total: names outside the
    /// supported set fall back to plaintext so the editor keeps working
    /// when the selector gains entries before this mapping does.
    pub fn resolve(name: &str) -> SyntaxMode {
        name.parse::<LanguageId>()
            .map(SyntaxMode::from)
            .unwrap_or(SyntaxMode::Plaintext)
    }
}

impl From<LanguageId> for SyntaxMode {
    fn from(language: LanguageId) -> Self {
        match language {
            LanguageId::Python => SyntaxMode::Python,
            LanguageId::Node => SyntaxMode::Javascript,
            LanguageId::Go => SyntaxMode::Go,
            LanguageId::Cpp => SyntaxMode::Cpp,
        }
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the session at the moment a run was triggered. Immutable
/// once constructed; later edits to the session do not reach it.
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    /// Correlation id for logs only, never serialized
    #[serde(skip)]
    pub id: Uuid,
    /// Language the code should be executed as
    pub language: LanguageId,
    /// Source code to execute, verbatim
    pub code: String,
}

impl RunRequest {
    pub fn new(language: LanguageId, code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            code,
        }
    }
}

/// Success body returned by the execution service. Fields beyond `output`
/// are ignored; a missing field reads as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub output: String,
}
