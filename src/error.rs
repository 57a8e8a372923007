use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugdexError {
    #[error("Executable '{tool}' not found on PATH")]
    ExecutableNotFound { tool: String },

    #[error("Failed to spawn '{command}': {reason}")]
    ProcessSpawn { command: String, reason: String },

    #[error("Command '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    #[error("Command '{command}' wrote to stderr: {stderr}")]
    NonEmptyStderr { command: String, stderr: String },

    #[error("Malformed package-manager response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlugdexError>;
