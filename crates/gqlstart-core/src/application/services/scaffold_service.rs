//! Scaffold Orchestrator - main application workflow.
//!
//! A run is a linear state machine:
//!
//! ```text
//! Init ─► Materialize ─► Generate ─► Install ─► Complete
//!             │              │           │
//!             ▼              ▼           ▼
//!         terminal      recorded,    terminal
//!          failure     Install runs   failure
//! ```
//!
//! Only materialization failure stops the run early: generation and
//! installation each produce value on their own, so a failed generator does
//! not prevent dependencies from being installed.

use std::path::Path;

use tracing::{debug, info, info_span, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ScaffoldError, ScaffoldOutcome,
        ports::{DependencyInstaller, Filesystem, ModelGenerator, TreeEntry},
    },
    domain::{RelativePath, ScaffoldConfig, TargetDirectory, Template, TemplateSource},
};

/// Everything one run needs, with the conflict precondition already checked.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'t> {
    template: &'t Template,
    target: TargetDirectory,
    config: ScaffoldConfig,
    force: bool,
}

impl<'t> ScaffoldRequest<'t> {
    /// Build a request, refusing a conflicting target unless `force` is set.
    pub fn new(
        template: &'t Template,
        target: TargetDirectory,
        config: ScaffoldConfig,
        force: bool,
    ) -> Result<Self, ScaffoldError> {
        if target.is_conflicting() && !force {
            return Err(ScaffoldError::DirectoryConflict {
                path: target.path().to_path_buf(),
                entries: target.conflicting_entries().to_vec(),
            });
        }
        Ok(Self {
            template,
            target,
            config,
            force,
        })
    }

    pub fn template(&self) -> &Template {
        self.template
    }

    pub fn target(&self) -> &TargetDirectory {
        &self.target
    }

    pub fn config(&self) -> ScaffoldConfig {
        self.config
    }
}

/// Drives materialization, generation and installation for one target.
pub struct ScaffoldOrchestrator {
    filesystem: Box<dyn Filesystem>,
    generator: Box<dyn ModelGenerator>,
    installer: Box<dyn DependencyInstaller>,
}

impl ScaffoldOrchestrator {
    /// Create a new orchestrator with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        generator: Box<dyn ModelGenerator>,
        installer: Box<dyn DependencyInstaller>,
    ) -> Self {
        Self {
            filesystem,
            generator,
            installer,
        }
    }

    /// Run a request built by [`ScaffoldRequest::new`].
    pub fn execute(&self, request: ScaffoldRequest<'_>) -> ScaffoldOutcome {
        self.run(
            request.template,
            &request.target,
            request.config,
            request.force,
        )
    }

    /// Scaffold `template` into `target`.
    ///
    /// The caller must not pass a conflicting target without `force`; the
    /// state is trusted as given and not re-validated here.
    #[instrument(
        skip_all,
        fields(
            template = %template.name(),
            target = %target.path().display(),
            state = %target.state(),
            force = force
        )
    )]
    pub fn run(
        &self,
        template: &Template,
        target: &TargetDirectory,
        config: ScaffoldConfig,
        force: bool,
    ) -> ScaffoldOutcome {
        let run_id = Uuid::new_v4();
        let mut outcome = ScaffoldOutcome::new(run_id);
        info!(%run_id, "Scaffold run started");

        // 1. Materialize (terminal on failure)
        match self.materialize(template, target) {
            Ok(count) => {
                outcome.record_files(count);
                info!(files = count, "Template materialized");
            }
            Err(e) => {
                warn!(error = %e, "Materialization failed");
                return outcome.fail(e);
            }
        }

        let root = target.path();

        // 2. Generate (recorded, non-terminal)
        let mut pending_generation_failure = None;
        if config.generate_models() {
            let _span = info_span!("generate").entered();
            match self.generator.generate(root) {
                Ok(()) => info!("Models generated"),
                Err(e) => {
                    warn!(error = %e, "Model generation failed, continuing");
                    pending_generation_failure = Some(ScaffoldError::GenerationFailed {
                        reason: e.to_string(),
                    });
                }
            }
        } else {
            debug!("Model generation skipped");
        }

        // 3. Install (terminal because nothing follows)
        if config.install_dependencies() {
            let _span = info_span!("install").entered();
            if let Some(gen_err) = pending_generation_failure.take() {
                outcome.record_generation_failure(gen_err);
            }
            if let Err(e) = self.installer.install(root) {
                warn!(error = %e, "Dependency installation failed");
                return outcome.fail(ScaffoldError::InstallationFailed {
                    reason: e.to_string(),
                });
            }
            info!("Dependencies installed");
        } else {
            debug!("Dependency installation skipped");
        }

        if let Some(gen_err) = pending_generation_failure {
            return outcome.fail(gen_err);
        }

        info!("Scaffold completed");
        outcome.complete()
    }

    // -------------------------------------------------------------------------
    // Materialization
    // -------------------------------------------------------------------------

    /// Create the target if needed and copy the whole template tree into it.
    ///
    /// Returns only after every write has completed.
    fn materialize(
        &self,
        template: &Template,
        target: &TargetDirectory,
    ) -> Result<usize, ScaffoldError> {
        let root = target.path();

        if !target.exists() {
            debug!("Creating target directory");
            self.filesystem
                .create_dir_all(root)
                .map_err(|e| ScaffoldError::DirectoryCreateFailed {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }

        match template.source() {
            TemplateSource::Embedded(files) => {
                for file in files.iter() {
                    let rel = RelativePath::try_new(file.path).map_err(|e| {
                        ScaffoldError::MaterializationFailed {
                            path: root.join(file.path),
                            reason: e.to_string(),
                        }
                    })?;
                    self.write_entry(root, &rel, file.contents.as_bytes())?;
                }
                Ok(files.len())
            }
            TemplateSource::Directory(source_root) => self.copy_tree(source_root, root),
        }
    }

    fn copy_tree(&self, source_root: &Path, root: &Path) -> Result<usize, ScaffoldError> {
        let entries =
            self.filesystem
                .walk(source_root)
                .map_err(|e| ScaffoldError::MaterializationFailed {
                    path: source_root.to_path_buf(),
                    reason: e.to_string(),
                })?;

        let mut written = 0;
        for entry in entries {
            match entry {
                TreeEntry::Directory(rel) => {
                    let dest = rel.under(root);
                    self.filesystem.create_dir_all(&dest).map_err(|e| {
                        ScaffoldError::MaterializationFailed {
                            path: dest.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                }
                TreeEntry::File(rel) => {
                    let src = rel.under(source_root);
                    let contents = self.filesystem.read_file(&src).map_err(|e| {
                        ScaffoldError::MaterializationFailed {
                            path: src.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    self.write_entry(root, &rel, &contents)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn write_entry(
        &self,
        root: &Path,
        rel: &RelativePath,
        contents: &[u8],
    ) -> Result<(), ScaffoldError> {
        let dest = rel.under(root);
        let fail = |e: crate::error::GqlError| ScaffoldError::MaterializationFailed {
            path: dest.clone(),
            reason: e.to_string(),
        };

        if let Some(parent) = dest.parent() {
            self.filesystem.create_dir_all(parent).map_err(fail)?;
        }
        self.filesystem.write_file(&dest, contents).map_err(fail)?;
        debug!(file = %rel, "Wrote file");
        Ok(())
    }
}
