//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use gqlstart_core::{
    application::ports::{Filesystem, TreeEntry},
    domain::RelativePath,
    error::{GqlError, GqlResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the orchestrator and
/// inspect the other afterwards. Writes and directory creation can be made to
/// fail below a given prefix to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    fail_writes_under: Option<PathBuf>,
    fail_creates_under: Option<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        {
            let mut inner = self.write_lock().expect("memory filesystem lock poisoned");
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.insert_dirs(parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), contents.as_ref().to_vec());
        }
        self
    }

    /// Seed a directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.write_lock()
            .expect("memory filesystem lock poisoned")
            .insert_dirs(path.as_ref());
        self
    }

    /// Make every `write_file` at or below `prefix` fail.
    pub fn fail_writes_under(self, prefix: impl Into<PathBuf>) -> Self {
        self.write_lock()
            .expect("memory filesystem lock poisoned")
            .fail_writes_under = Some(prefix.into());
        self
    }

    /// Make every `create_dir_all` at or below `prefix` fail.
    pub fn fail_creates_under(self, prefix: impl Into<PathBuf>) -> Self {
        self.write_lock()
            .expect("memory filesystem lock poisoned")
            .fail_creates_under = Some(prefix.into());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Whether `path` is a known directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }

    /// Snapshot of every file and its bytes.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.inner
            .read()
            .map(|inner| inner.files.clone())
            .unwrap_or_default()
    }

    fn read_lock(&self) -> GqlResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| GqlError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }

    fn write_lock(&self) -> GqlResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| GqlError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }
}

impl MemoryFilesystemInner {
    fn insert_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

fn not_found(path: &Path, operation: &str) -> GqlError {
    GqlError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: No such file or directory"),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> GqlResult<Vec<String>> {
        let inner = self.read_lock()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "list directory"));
        }

        let names = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn walk(&self, root: &Path) -> GqlResult<Vec<TreeEntry>> {
        let inner = self.read_lock()?;
        if !inner.directories.contains(root) {
            return Err(not_found(root, "walk template tree"));
        }

        let mut entries: Vec<(PathBuf, bool)> = inner
            .directories
            .iter()
            .map(|p| (p.clone(), true))
            .chain(inner.files.keys().map(|p| (p.clone(), false)))
            .filter(|(p, _)| p != root && p.starts_with(root))
            .collect();
        entries.sort();

        entries
            .into_iter()
            .map(|(path, is_dir)| {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| GqlError::Internal {
                        message: e.to_string(),
                    })
                    .and_then(|p| RelativePath::try_new(p).map_err(GqlError::from))?;
                Ok(if is_dir {
                    TreeEntry::Directory(rel)
                } else {
                    TreeEntry::File(rel)
                })
            })
            .collect()
    }

    fn create_dir_all(&self, path: &Path) -> GqlResult<()> {
        let mut inner = self.write_lock()?;

        if let Some(prefix) = &inner.fail_creates_under {
            if path.starts_with(prefix) {
                return Err(GqlError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Failed to create directory: Permission denied".into(),
                });
            }
        }

        if let Some(blocking) = path.ancestors().find(|a| inner.files.contains_key(*a)) {
            return Err(GqlError::Filesystem {
                path: path.to_path_buf(),
                reason: format!(
                    "Failed to create directory: {} is not a directory",
                    blocking.display()
                ),
            });
        }

        inner.insert_dirs(path);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> GqlResult<Vec<u8>> {
        let inner = self.read_lock()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "read file"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> GqlResult<()> {
        let mut inner = self.write_lock()?;

        if let Some(prefix) = &inner.fail_writes_under {
            if path.starts_with(prefix) {
                return Err(GqlError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Failed to write file: No space left on device".into(),
                });
            }
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(path, "write file"));
            }
        }
        if inner.directories.contains(path) {
            return Err(GqlError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to write file: Is a directory".into(),
            });
        }

        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
