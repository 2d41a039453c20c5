//! Filesystem-based template loader.
//!
//! Discovers user templates in a directory and turns them into domain
//! [`Template`] values backed by [`TemplateSource::Directory`].
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── yoga-prisma/
//! │   ├── template.toml        ← manifest (required)
//! │   └── template/            ← copied verbatim into the new project
//! │       ├── package.json
//! │       └── src/
//! │           └── schema.graphql
//! └── notes.txt                ← ignored, not a directory
//! ```
//!
//! # `template.toml` format
//!
//! ```toml
//! [template]
//! name        = "yoga-prisma"           # unique, no whitespace
//! description = "Yoga with Prisma"      # optional
//! root        = "template"              # optional, relative to the manifest
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use gqlstart_core::domain::{DomainError, RelativePath, Template, TemplateSource};

const MANIFEST_FILE: &str = "template.toml";
const DEFAULT_ROOT: &str = "template";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised `template.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateManifest {
    pub template: TemplateSection,
}

/// `[template]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSection {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Directory holding the project files, relative to the manifest.
    #[serde(default)]
    pub root: Option<String>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`Template`] values from a directory of `template.toml` manifests.
///
/// Each immediate subdirectory holding a valid manifest is one template.
/// Subdirectories without a manifest, or with an invalid one, emit a `WARN`
/// log and are skipped.
///
/// ```no_run
/// use gqlstart_adapters::FilesystemTemplateLoader;
///
/// let templates = FilesystemTemplateLoader::new("./templates").load_all()?;
/// println!("Loaded {} templates", templates.len());
/// # Ok::<(), gqlstart_core::domain::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every valid template, sorted by name.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidTemplate`] if the directory is missing or cannot
    /// be read. Individual broken templates never fail the batch.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<Template>, DomainError> {
        let read_dir = fs::read_dir(&self.templates_dir).map_err(|e| {
            DomainError::InvalidTemplate(format!(
                "failed to read templates directory '{}': {e}",
                self.templates_dir.display()
            ))
        })?;

        let mut templates = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                DomainError::InvalidTemplate(format!("failed to read directory entry: {e}"))
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            match load_template_from_dir(&path) {
                Ok(template) => {
                    debug!(name = %template.name(), "loaded template");
                    templates.push(template);
                }
                Err(e) => {
                    warn!(
                        dir = %path.display(),
                        error = %e,
                        "skipping template directory due to load error"
                    );
                }
            }
        }

        templates.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(templates)
    }
}

fn load_template_from_dir(dir: &Path) -> Result<Template, DomainError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&manifest_path).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to read '{}': {e}",
            manifest_path.display()
        ))
    })?;

    let manifest: TemplateManifest = toml::from_str(&raw).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to parse '{}': {e}",
            manifest_path.display()
        ))
    })?;

    let root = RelativePath::try_new(manifest.template.root.as_deref().unwrap_or(DEFAULT_ROOT))?
        .under(dir);
    if !root.is_dir() {
        return Err(DomainError::InvalidTemplate(format!(
            "template root '{}' is not a directory",
            root.display()
        )));
    }

    Template::new(
        manifest.template.name,
        manifest.template.description.unwrap_or_default(),
        TemplateSource::Directory(root),
    )
}
