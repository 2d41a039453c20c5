use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gqlstart_core::{
    application::ports::DependencyInstaller,
    error::{GqlError, GqlResult},
};

use super::{CommandSpec, OutputMode, run};

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Yarn,
    Npm,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Yarn, Self::Npm, Self::Pnpm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
        }
    }

    /// `yarn` when it is on `PATH`, otherwise `npm`.
    pub fn detect() -> Self {
        Self::detect_with(|program| which::which(program).is_ok())
    }

    fn detect_with(on_path: impl Fn(&str) -> bool) -> Self {
        let manager = if on_path(Self::Yarn.as_str()) {
            Self::Yarn
        } else {
            Self::Npm
        };
        debug!(package_manager = manager.as_str(), "Detected package manager");
        manager
    }

    pub fn install_command(self) -> CommandSpec {
        CommandSpec::new(self.as_str(), ["install"])
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = GqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yarn" => Ok(Self::Yarn),
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(GqlError::Configuration {
                message: format!("unknown package manager '{other}' (expected yarn, npm or pnpm)"),
            }),
        }
    }
}

/// Runs `<package manager> install` in the project root.
#[derive(Debug, Clone)]
pub struct PackageManagerInstaller {
    manager: PackageManager,
    output: OutputMode,
}

impl PackageManagerInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self {
            manager,
            output: OutputMode::default(),
        }
    }

    /// Use the configured manager, or detect one.
    pub fn configured(manager: Option<PackageManager>) -> Self {
        Self::new(manager.unwrap_or_else(PackageManager::detect))
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }
}

impl DependencyInstaller for PackageManagerInstaller {
    fn install(&self, project_root: &Path) -> GqlResult<()> {
        let command = self.manager.install_command();
        info!(command = %command, "Installing dependencies");
        run(&command, project_root, self.output)
    }
}
