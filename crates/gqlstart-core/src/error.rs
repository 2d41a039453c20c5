//! Unified error handling for gqlstart Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors together with the failures reported by adapters behind the ports.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ScaffoldError;
use crate::domain::DomainError;

/// Root error type for gqlstart Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GqlError {
    /// Errors from the domain layer (catalog or path invariants).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (scaffold stages).
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),

    /// A filesystem adapter failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    Command { command: String, reason: String },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GqlError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Scaffold(e) => e.suggestions(),
            Self::Filesystem { path, .. } => vec![format!(
                "Make sure {} is writable and the disk is not full",
                path.display()
            )],
            Self::Command { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                vec![
                    format!("Make sure `{program}` is installed and on your PATH"),
                    format!("Run `{command}` yourself inside the project to see its output"),
                ]
            }
            Self::Configuration { .. } => {
                vec!["Review the [commands] section of your gqlstart config".into()]
            }
            Self::Internal { .. } => vec!["Please file an issue with the output of -vv".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Scaffold(e) => e.category(),
            Self::Filesystem { .. } | Self::Command { .. } => ErrorCategory::Internal,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GqlResult<T> = Result<T, GqlError>;
