pub mod common;
pub mod config;
pub mod registry;
pub mod target;
pub mod template;

pub use crate::domain::DomainError;
pub use registry::TemplateRegistry;
pub use target::TargetDirectory;
pub use template::Template;
