//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;

use tracing::debug;

use gqlstart_adapters::{builtin_registry, registry_with_directory};
use gqlstart_core::application::TemplateService;

use crate::{config::AppConfig, error::CliResult};

/// Built-in templates, plus the user's templates directory when configured.
fn template_service(config: &AppConfig) -> CliResult<TemplateService> {
    let registry = match &config.templates.local_path {
        Some(dir) => {
            debug!(dir = %dir.display(), "Loading user templates");
            registry_with_directory(dir)?
        }
        None => builtin_registry()?,
    };
    Ok(TemplateService::new(registry))
}
