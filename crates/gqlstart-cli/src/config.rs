//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GQLSTART_<SECTION>__<KEY>`, e.g.
//!    `GQLSTART_DEFAULTS__TEMPLATE=flow-yoga`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use gqlstart_adapters::DEFAULT_TEMPLATE;

const ENV_PREFIX: &str = "GQLSTART";

/// Keys accepted by `gqlstart config get|set`.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.template",
    "defaults.install",
    "defaults.generate",
    "output.no_color",
    "output.format",
    "templates.local_path",
    "commands.generate",
    "commands.package_manager",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// External commands run after materialization.
    pub commands: CommandsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub template: String,
    pub install: bool,
    pub generate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of user templates, each with a `template.toml`.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Model generator argv.
    pub generate: Vec<String>,
    /// `yarn`, `npm` or `pnpm`; auto-detected when unset.
    pub package_manager: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.into(),
            install: true,
            generate: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            generate: vec!["npx".into(), "graphqlgen".into()],
            package_manager: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            templates: TemplateConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it the default location is read when present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(" ")
            .with_list_parse_key("commands.generate");

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gqlstart.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "gqlstart", "gqlstart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gqlstart.toml"))
    }

    /// The file `init` and `config set` write to.
    pub fn target_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.template, "typescript-yoga");
        assert!(cfg.defaults.install);
        assert!(cfg.defaults.generate);
        assert_eq!(cfg.commands.generate, vec!["npx", "graphqlgen"]);
        assert_eq!(cfg.commands.package_manager, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ntemplate = \"flow-yoga\"\ninstall = false\n\n\
             [commands]\npackage_manager = \"pnpm\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.template, "flow-yoga");
        assert!(!cfg.defaults.install);
        assert!(cfg.defaults.generate);
        assert_eq!(cfg.commands.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(cfg.commands.generate, vec!["npx", "graphqlgen"]);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults\ntemplate = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn target_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/gqlstart.toml");
        assert_eq!(AppConfig::target_path(Some(&explicit)), explicit);
        assert_eq!(AppConfig::target_path(None), AppConfig::config_path());
    }
}
