//! Error types for the CLI application.
//!
//! Handlers return [`CliError`] and let `run` turn it into a message and an
//! exit code.

use std::fmt;

use headsup_engine::errors::GameError;

use crate::config::ConfigError;
use crate::wallet::WalletError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    /// Rules core refused something the CLI asked for
    Engine(String),

    Wallet(String),

    /// The user quit mid-session
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<WalletError> for CliError {
    fn from(error: WalletError) -> Self {
        CliError::Wallet(error.to_string())
    }
}

impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}
