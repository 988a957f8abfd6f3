//! Error types for the terminal front end.

use machi_explorer::usecase::{ConfigError, ExplorerError};
use thiserror::Error;

/// Fatal front-end errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid simulation flags
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The explorer could not start
    #[error("explorer error: {0}")]
    Explorer(#[from] ExplorerError),

    /// Line editor could not be initialized
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("failed to encode transcript: {0}")]
    Export(#[from] serde_json::Error),
}
