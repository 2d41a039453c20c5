use std::fmt;

/// The caller's intent for one scaffold run. Both flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldConfig {
    install_dependencies: bool,
    generate_models: bool,
}

impl ScaffoldConfig {
    pub const fn new(install_dependencies: bool, generate_models: bool) -> Self {
        Self {
            install_dependencies,
            generate_models,
        }
    }

    /// Materialize only.
    pub const fn files_only() -> Self {
        Self::new(false, false)
    }

    pub const fn install_dependencies(&self) -> bool {
        self.install_dependencies
    }

    pub const fn generate_models(&self) -> bool {
        self.generate_models
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Stages of a scaffold run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Materialize,
    Generate,
    Install,
    Complete,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Materialize => "materialize",
            Self::Generate => "generate",
            Self::Install => "install",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
