//! Directory Validator - classifies a scaffold destination.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{DirectoryState, TargetDirectory},
};

/// Inspects a target path through the [`Filesystem`] port.
///
/// Every call reads the filesystem again; nothing is cached between runs.
pub struct DirectoryValidator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryValidator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Classify `path` as `NotExists`, `EmptyOrAllowlisted`, or `Conflicting`.
    ///
    /// A path that exists but cannot be listed (a regular file, or a
    /// directory we may not read) is `Conflicting` with its own name as the
    /// single entry: nothing can be scaffolded there.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn classify(&self, path: impl AsRef<Path>) -> TargetDirectory {
        let path = path.as_ref();

        if !self.filesystem.exists(path) {
            debug!("target does not exist");
            return TargetDirectory::new(path, DirectoryState::NotExists);
        }

        let state = match self.filesystem.list_dir(path) {
            Ok(entries) => DirectoryState::from_entries(entries),
            Err(e) => {
                warn!(error = %e, "target exists but cannot be listed");
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                DirectoryState::Conflicting(vec![name])
            }
        };

        debug!(state = %state, "target classified");
        TargetDirectory::new(path, state)
    }
}
