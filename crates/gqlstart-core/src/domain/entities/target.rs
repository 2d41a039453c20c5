//! Target directory classification.

use std::fmt;
use std::path::{Path, PathBuf};

/// Entries ignored when deciding whether a directory is empty.
pub const ALLOWLISTED_ENTRIES: &[&str] = &[".git", ".gitignore"];

/// What the validator found at the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryState {
    NotExists,
    EmptyOrAllowlisted,
    /// Sorted names of the entries that block scaffolding.
    Conflicting(Vec<String>),
}

impl DirectoryState {
    /// Classify an existing directory from the names of its immediate entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut conflicting: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|name| !ALLOWLISTED_ENTRIES.contains(&name.as_str()))
            .collect();

        if conflicting.is_empty() {
            Self::EmptyOrAllowlisted
        } else {
            conflicting.sort();
            Self::Conflicting(conflicting)
        }
    }
}

impl fmt::Display for DirectoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotExists => write!(f, "not-exists"),
            Self::EmptyOrAllowlisted => write!(f, "empty"),
            Self::Conflicting(entries) => write!(f, "conflicting ({} entries)", entries.len()),
        }
    }
}

/// The destination of a scaffold run, together with the state it was in when
/// it was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    path: PathBuf,
    state: DirectoryState,
}

impl TargetDirectory {
    pub fn new(path: impl Into<PathBuf>, state: DirectoryState) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn exists(&self) -> bool {
        !matches!(self.state, DirectoryState::NotExists)
    }

    pub fn is_conflicting(&self) -> bool {
        matches!(self.state, DirectoryState::Conflicting(_))
    }

    /// Entries blocking the scaffold; empty unless conflicting.
    pub fn conflicting_entries(&self) -> &[String] {
        match &self.state {
            DirectoryState::Conflicting(entries) => entries,
            _ => &[],
        }
    }
}
