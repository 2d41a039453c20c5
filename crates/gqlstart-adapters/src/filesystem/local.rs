//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use gqlstart_core::{
    application::ports::{Filesystem, TreeEntry},
    domain::RelativePath,
    error::{GqlError, GqlResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> GqlResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn walk(&self, root: &Path) -> GqlResult<Vec<TreeEntry>> {
        let mut out = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| GqlError::Filesystem {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: format!("Failed to walk template tree: {e}"),
            })?;

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                debug!(path = %entry.path().display(), "Skipping symlink");
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| GqlError::Internal {
                    message: format!("walked outside {}: {e}", root.display()),
                })
                .and_then(|p| RelativePath::try_new(p).map_err(GqlError::from))?;

            if file_type.is_dir() {
                out.push(TreeEntry::Directory(rel));
            } else if file_type.is_file() {
                out.push(TreeEntry::File(rel));
            }
        }

        Ok(out)
    }

    fn create_dir_all(&self, path: &Path) -> GqlResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_file(&self, path: &Path) -> GqlResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> GqlResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GqlError {
    GqlError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn list_dir_returns_immediate_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("README.md"), "hi").unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();

        let mut names = LocalFilesystem.list_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![".git", "README.md", "src"]);
    }

    #[test]
    fn list_dir_on_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            LocalFilesystem.list_dir(&file),
            Err(GqlError::Filesystem { .. })
        ));
    }

    #[test]
    fn walk_lists_parents_before_children() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/generated")).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("src/index.ts"), "").unwrap();

        let entries = LocalFilesystem.walk(dir.path()).unwrap();
        let rel = |p: &str| RelativePath::try_new(p).unwrap();
        assert_eq!(
            entries,
            vec![
                TreeEntry::File(rel("package.json")),
                TreeEntry::Directory(rel("src")),
                TreeEntry::Directory(rel("src/generated")),
                TreeEntry::File(rel("src/index.ts")),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn walk_skips_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();

        let entries = LocalFilesystem.walk(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![TreeEntry::File(RelativePath::try_new("real.txt").unwrap())]
        );
    }

    #[test]
    fn write_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        LocalFilesystem.write_file(&path, b"long content").unwrap();
        LocalFilesystem.write_file(&path, b"short").unwrap();
        assert_eq!(LocalFilesystem.read_file(&path).unwrap(), b"short");
    }
}
