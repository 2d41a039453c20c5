//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gqlstart-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RelativePath;
use crate::error::GqlResult;

/// One node of a template tree, relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    Directory(RelativePath),
    File(RelativePath),
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gqlstart_adapters::filesystem::LocalFilesystem` (production)
/// - `gqlstart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate entries of a directory.
    fn list_dir(&self, path: &Path) -> GqlResult<Vec<String>>;

    /// Every directory and file below `root`, parents before children.
    /// Symbolic links are skipped, not followed.
    fn walk(&self, root: &Path) -> GqlResult<Vec<TreeEntry>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GqlResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> GqlResult<Vec<u8>>;

    /// Write a whole file, truncating any previous content.
    fn write_file(&self, path: &Path, contents: &[u8]) -> GqlResult<()>;
}

/// Port for the model/code generator. Opaque to the core: it is handed the
/// project root and either succeeds or fails.
#[cfg_attr(test, mockall::automock)]
pub trait ModelGenerator: Send + Sync {
    fn generate(&self, project_root: &Path) -> GqlResult<()>;
}

/// Port for dependency installation. Opaque to the core.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    fn install(&self, project_root: &Path) -> GqlResult<()>;
}
