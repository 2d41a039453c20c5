//! gqlstart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gqlstart
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gqlstart-cli (CLI)             │
//! │   (resolves template, validates dir)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DirectoryValidator, Orchestrator)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ModelGenerator, Installer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gqlstart-adapters (Infrastructure)   │
//! │ (LocalFilesystem, CommandGenerator, ..) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gqlstart_core::prelude::*;
//!
//! let registry = builtin_registry();
//! let template = registry.resolve(Some("typescript-yoga"))?;
//!
//! let target = DirectoryValidator::new(&filesystem).classify("/abs/path/my-server");
//!
//! let request = ScaffoldRequest::new(template, target, ScaffoldConfig::default(), false)?;
//! let orchestrator = ScaffoldOrchestrator::new(
//!     Box::new(filesystem),
//!     Box::new(generator),
//!     Box::new(installer),
//! );
//! let outcome = orchestrator.execute(request);
//! assert!(outcome.is_clean());
//! ```

// Domain layer (pure types and invariants)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DirectoryValidator, ScaffoldError, ScaffoldOrchestrator, ScaffoldOutcome, ScaffoldRequest,
        TemplateInfo, TemplateService,
        ports::{DependencyInstaller, Filesystem, ModelGenerator, TreeEntry},
    };
    pub use crate::domain::{
        DirectoryState, EmbeddedFile, RelativePath, ScaffoldConfig, Stage, TargetDirectory,
        Template, TemplateNotFound, TemplateRegistry, TemplateSource,
    };
    pub use crate::error::{GqlError, GqlResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
