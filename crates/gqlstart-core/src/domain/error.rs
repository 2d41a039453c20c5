// ============================================================================
// domain/error.rs - DOMAIN INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised while building domain values (template catalogs, relative paths),
/// never while scaffolding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template name cannot be empty")]
    EmptyTemplateName,

    #[error("Duplicate template name in catalog: {name}")]
    DuplicateTemplate { name: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the template root: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    #[error("Template catalog is empty")]
    EmptyCatalog,

    #[error("Default template '{name}' is not in the catalog")]
    UnknownDefault { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateTemplate { name } => vec![
                format!("Two templates are named '{}'", name),
                "Rename the user template in its template.toml".into(),
            ],
            Self::InvalidTemplate(msg) => vec![
                "Check the template manifest".into(),
                format!("Details: {}", msg),
            ],
            Self::UnknownDefault { name } => vec![
                format!("'{}' must be one of the registered templates", name),
                "Try: gqlstart list".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate(_)
            | Self::EmptyTemplateName
            | Self::DuplicateTemplate { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::UnknownDefault { .. } => ErrorCategory::NotFound,
            Self::EmptyCatalog => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
