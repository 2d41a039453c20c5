//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "classify the target" or "scaffold a project".

pub mod directory_validator;
pub mod scaffold_service;
pub mod template_service;

pub use directory_validator::DirectoryValidator;
pub use scaffold_service::{ScaffoldOrchestrator, ScaffoldRequest};
pub use template_service::{TemplateInfo, TemplateService};
