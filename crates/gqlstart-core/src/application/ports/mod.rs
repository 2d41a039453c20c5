//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gqlstart-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory inspection, template tree reads, writes
//!   - `ModelGenerator`: the external code generator
//!   - `DependencyInstaller`: the external package manager

pub mod output;

pub use output::{DependencyInstaller, Filesystem, ModelGenerator, TreeEntry};
