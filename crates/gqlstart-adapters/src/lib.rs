//! Infrastructure adapters for gqlstart.
//!
//! This crate implements the ports defined in `gqlstart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod invoker;
pub mod template_loader;

// Re-export commonly used adapters
pub use builtin_templates::{DEFAULT_TEMPLATE, builtin_registry, registry_with_directory};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use invoker::{CommandGenerator, CommandSpec, OutputMode, PackageManager, PackageManagerInstaller};
pub use template_loader::FilesystemTemplateLoader;
