//! Result of one scaffold run.

use uuid::Uuid;

use crate::application::ScaffoldError;
use crate::domain::Stage;

/// What a scaffold run did, and where it stopped.
///
/// `stage` is the last stage that executed (or `Complete`), `error` the
/// failure from that stage. A generation failure followed by an install
/// attempt is kept in `generation_error` so it is never lost.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldOutcome {
    run_id: Uuid,
    stage: Stage,
    error: Option<ScaffoldError>,
    generation_error: Option<ScaffoldError>,
    files_written: usize,
}

impl ScaffoldOutcome {
    pub(crate) fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            stage: Stage::Materialize,
            error: None,
            generation_error: None,
            files_written: 0,
        }
    }

    pub(crate) fn fail(mut self, error: ScaffoldError) -> Self {
        if let Some(stage) = error.stage() {
            self.stage = stage;
        }
        self.error = Some(error);
        self
    }

    pub(crate) fn record_files(&mut self, count: usize) {
        self.files_written = count;
    }

    pub(crate) fn record_generation_failure(&mut self, error: ScaffoldError) {
        self.generation_error = Some(error);
    }

    pub(crate) fn complete(mut self) -> Self {
        self.stage = Stage::Complete;
        self.error = None;
        self
    }

    /// Correlates the outcome with the run's log span.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn error(&self) -> Option<&ScaffoldError> {
        self.error.as_ref()
    }

    /// A generation failure that did not end the run.
    pub fn generation_error(&self) -> Option<&ScaffoldError> {
        self.generation_error.as_ref()
    }

    pub fn files_written(&self) -> usize {
        self.files_written
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }

    /// Complete and nothing failed along the way.
    pub fn is_clean(&self) -> bool {
        self.is_complete() && self.generation_error.is_none()
    }

    /// Every failure of the run, in stage order.
    pub fn failures(&self) -> impl Iterator<Item = &ScaffoldError> {
        self.generation_error.iter().chain(self.error.iter())
    }
}
