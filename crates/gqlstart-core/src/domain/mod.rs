//! Core domain layer for gqlstart.
//!
//! Pure types and invariants with no I/O:
//!
//! - **Template / TemplateRegistry**: what can be scaffolded, and lookup by name
//! - **TargetDirectory / DirectoryState**: where it goes, and whether that is safe
//! - **ScaffoldConfig / Stage**: what the caller asked for, and how far a run got
//!
//! All filesystem and process access lives behind the ports in
//! `crate::application::ports`.
pub mod entities;
pub mod error;

pub use entities::{
    common::RelativePath,
    config::{ScaffoldConfig, Stage},
    registry::{TemplateNotFound, TemplateRegistry},
    target::{ALLOWLISTED_ENTRIES, DirectoryState, TargetDirectory},
    template::{EmbeddedFile, Template, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};
