use thiserror::Error;

use crate::lookup::LookupError;

/// Custom error types for charlearner
#[derive(Debug, Error)]
pub enum CharLearnerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to {0} without --yes")]
    Confirmation(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
