use std::path::PathBuf;

use crate::review::roles::Role;

/// Errors related to configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading config at {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error(
        "Missing {var}. Create a .env file with {var}=... or export it in your shell. \
         The variable name is set by [auth] api_key_env in critique.toml."
    )]
    MissingApiKey { var: String },
}

/// Errors raised while running the review chain and persisting its output.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("File not found at {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Error reading file {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("LLM error during {role} review: {message}")]
    Llm { role: Role, message: String },

    #[error("Model returned no text for the {role} review")]
    EmptyResponse { role: Role },

    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
