//! CLI error type.
//!
//! Everything a command can fail with ends up as a [`CliError`], which knows
//! its exit code and how to render itself with suggestions.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use gqlstart_core::{
    application::ScaffoldError,
    domain::DomainError,
    error::{ErrorCategory as CoreCategory, GqlError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or value the user passed is unusable.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Config file unreadable, malformed or unwritable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by the core or an adapter.
    #[error("{0}")]
    Core(#[from] GqlError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ScaffoldError> for CliError {
    fn from(err: ScaffoldError) -> Self {
        CliError::Core(GqlError::Scaffold(err))
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(GqlError::Domain(err))
    }
}

impl CliError {
    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::InvalidInput { .. } => vec!["Run with --help to see accepted values".into()],
            Self::ConfigError { .. } => vec![
                "Inspect the file printed by 'gqlstart config path'".into(),
                "Regenerate it with 'gqlstart init --force'".into(),
            ],
            Self::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    vec!["Check that you can write to the target location".into()]
                }
                _ => vec![format!("Underlying error: {source}")],
            },
        }
    }

    /// Category used for the exit code and log level.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error message, cause chain (verbose only) and suggestions, with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let heading = |text: &str| {
            if color {
                text.yellow().bold().to_string()
            } else {
                text.to_string()
            }
        };

        let mut out = if color {
            format!("\n{} {}\n", "\u{2717} Error:".red().bold(), self.to_string().red())
        } else {
            format!("\nError: {self}\n")
        };

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                if color {
                    out.push_str(&format!("  {}\n", line.dimmed()));
                } else {
                    out.push_str(&format!("  {line}\n"));
                }
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", heading("Suggestions:")));
            for hint in &suggestions {
                out.push_str(&format!("  - {hint}\n"));
            }
        }

        if !verbose {
            out.push_str("\nRe-run with --verbose for the full cause chain.\n");
        }
        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        let category = self.category();
        let exit_code = self.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code, error = %self, "command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code, error = %self, "command failed");
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "underlying cause");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or a directory conflict.
    UserError,
    /// Unknown template.
    NotFound,
    Configuration,
    /// Bugs, I/O failures and failed scaffold steps.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// `.with_cli_context(|| ...)` for results whose error has no `From` impl.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::de::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use std::io;

    fn conflict() -> CliError {
        ScaffoldError::DirectoryConflict {
            path: PathBuf::from("/tmp/app"),
            entries: vec!["README.md".into()],
        }
        .into()
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn conflict_suggests_force() {
        assert!(conflict().suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn unknown_template_lists_available() {
        let err: CliError = ScaffoldError::TemplateNotFound {
            name: "nope".into(),
            available: vec!["typescript-yoga".into(), "flow-yoga".into()],
        }
        .into();
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("typescript-yoga")));
        assert!(suggestions.iter().any(|s| s.contains("flow-yoga")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_conflict_is_user_error() {
        assert_eq!(conflict().exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err: CliError = ScaffoldError::TemplateNotFound {
            name: "x".into(),
            available: vec![],
        }
        .into();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        let core: CliError = GqlError::Configuration {
            message: "empty command".into(),
        }
        .into();
        assert_eq!(core.exit_code(), 4);
    }

    #[test]
    fn exit_code_stage_failures_are_internal() {
        let generation: CliError = ScaffoldError::GenerationFailed {
            reason: "boom".into(),
        }
        .into();
        let install: CliError = ScaffoldError::InstallationFailed {
            reason: "boom".into(),
        }
        .into();
        assert_eq!(generation.exit_code(), 1);
        assert_eq!(install.exit_code(), 1);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = conflict().format_plain(false);
        assert!(s.contains("Error: Directory /tmp/app must be empty"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_toml_error() {
        let result: Result<toml::Table, toml::de::Error> = toml::from_str("[broken");
        let cli = result.with_cli_context(|| "parsing config");
        assert!(matches!(cli, Err(CliError::ConfigError { .. })));
    }
}
