//! Template domain entity.
//!
//! A [`Template`] names a file tree that seeds a new project. The tree itself
//! lives behind a [`TemplateSource`]:
//!
//! ```text
//! Template
//! ├── name         unique slug, used for lookup ("typescript-yoga")
//! ├── description  one line for `gqlstart list`
//! └── source
//!      ├── Embedded(&'static [EmbeddedFile])   compiled into the binary
//!      └── Directory(PathBuf)                  copied from disk
//! ```
//!
//! Templates are built once when the registry is assembled and never mutated.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// One file of an embedded template bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedFile {
    /// Path relative to the template root, `/`-separated.
    pub path: &'static str,
    pub contents: &'static str,
}

impl EmbeddedFile {
    pub const fn new(path: &'static str, contents: &'static str) -> Self {
        Self { path, contents }
    }
}

/// Where a template's file tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Files compiled into the binary.
    Embedded(&'static [EmbeddedFile]),
    /// A directory on disk; its whole contents are the template.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Short human label for listings.
    pub fn label(&self) -> String {
        match self {
            Self::Embedded(_) => "builtin".to_string(),
            Self::Directory(path) => path.display().to_string(),
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        match self {
            Self::Directory(path) => Some(path),
            Self::Embedded(_) => None,
        }
    }
}

/// A named, reusable source file tree used to seed a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    description: String,
    source: TemplateSource,
}

impl Template {
    /// Build a template, validating its name and (for embedded bundles) every
    /// file path.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: TemplateSource,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyTemplateName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidTemplate(format!(
                "name '{name}' must not contain whitespace"
            )));
        }

        if let TemplateSource::Embedded(files) = &source {
            if files.is_empty() {
                return Err(DomainError::InvalidTemplate(format!(
                    "embedded template '{name}' has no files"
                )));
            }
            for file in files.iter() {
                RelativePath::try_new(file.path)?;
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
