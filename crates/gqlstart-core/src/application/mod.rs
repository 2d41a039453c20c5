//! Application layer for gqlstart.
//!
//! This layer contains:
//! - **Services**: DirectoryValidator, ScaffoldOrchestrator, TemplateService
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: The scaffold error taxonomy
//!
//! Catalog and path invariants live in `crate::domain`.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DirectoryValidator, ScaffoldOrchestrator, ScaffoldRequest, TemplateInfo, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DependencyInstaller, Filesystem, ModelGenerator, TreeEntry};

pub use error::ScaffoldError;
pub use outcome::ScaffoldOutcome;
