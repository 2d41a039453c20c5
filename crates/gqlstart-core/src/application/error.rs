//! Application layer errors.
//!
//! These errors represent failures in orchestration: the caller-side
//! preconditions (`TemplateNotFound`, `DirectoryConflict`) and the per-stage
//! failures a scaffold run can record. Catalog invariants are `DomainError`s.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Stage, TemplateNotFound};
use crate::error::ErrorCategory;

/// Errors reported while preparing or executing a scaffold run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// The requested template is not in the registry.
    #[error("Unknown template '{name}'. Available templates: {}", .available.join(", "))]
    TemplateNotFound { name: String, available: Vec<String> },

    /// The target directory holds unrelated files and `force` was not given.
    #[error("Directory {} must be empty (found: {})", .path.display(), .entries.join(", "))]
    DirectoryConflict { path: PathBuf, entries: Vec<String> },

    /// The target directory did not exist and could not be created.
    #[error("Failed to create directory {}: {reason}", .path.display())]
    DirectoryCreateFailed { path: PathBuf, reason: String },

    /// Copying the template tree failed part-way.
    #[error("Failed to materialize template at {}: {reason}", .path.display())]
    MaterializationFailed { path: PathBuf, reason: String },

    /// The model generator reported a failure.
    #[error("Model generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// Dependency installation reported a failure.
    #[error("Dependency installation failed: {reason}")]
    InstallationFailed { reason: String },
}

impl From<TemplateNotFound> for ScaffoldError {
    fn from(err: TemplateNotFound) -> Self {
        Self::TemplateNotFound {
            name: err.name,
            available: err.available,
        }
    }
}

impl ScaffoldError {
    /// The stage this error belongs to, if it arises inside a run.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::TemplateNotFound { .. } | Self::DirectoryConflict { .. } => None,
            Self::DirectoryCreateFailed { .. } | Self::MaterializationFailed { .. } => {
                Some(Stage::Materialize)
            }
            Self::GenerationFailed { .. } => Some(Stage::Generate),
            Self::InstallationFailed { .. } => Some(Stage::Install),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { available, .. } => {
                let mut out = vec!["Available templates:".to_string()];
                out.extend(available.iter().map(|name| format!("  • {name}")));
                out.push("Try: gqlstart list".into());
                out
            }
            Self::DirectoryConflict { path, .. } => vec![
                format!("'{}' already contains files", path.display()),
                "Use --force to scaffold into it anyway (files may be overwritten)".into(),
                "Or choose an empty or new directory".into(),
            ],
            Self::DirectoryCreateFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent path is a directory".into(),
            ],
            Self::MaterializationFailed { .. } => vec![
                "Check available disk space".into(),
                "Check file permissions in the target directory".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "The template files are in place; fix the schema or models".into(),
                "Then run the generator manually: npx graphqlgen".into(),
            ],
            Self::InstallationFailed { .. } => vec![
                "The template files are in place".into(),
                "Install dependencies manually: yarn install (or npm install)".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DirectoryConflict { .. } => ErrorCategory::Validation,
            Self::DirectoryCreateFailed { .. }
            | Self::MaterializationFailed { .. }
            | Self::GenerationFailed { .. }
            | Self::InstallationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
