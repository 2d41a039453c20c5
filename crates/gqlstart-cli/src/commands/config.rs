//! `gqlstart config`: read and write configuration values.

use std::path::Path;

use clap::ValueEnum;
use toml::{Table, Value};

use gqlstart_adapters::PackageManager;
use gqlstart_core::error::GqlError;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::target_path(config_file);
            let mut table = if path.exists() {
                let raw = std::fs::read_to_string(&path)
                    .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
                toml::from_str::<Table>(&raw)
                    .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
            } else {
                Table::new()
            };

            set_config_value(&mut table, &key, &value)?;
            let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            toml::from_str::<AppConfig>(&text)
                .with_cli_context(|| format!("'{key}' = '{value}' makes the config invalid"))?;

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, text)
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            let serialised = if output.is_json() {
                serde_json::to_string_pretty(&config).map_err(|e| GqlError::Internal {
                    message: format!("Failed to serialise config: {e}"),
                })?
            } else {
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?
            };
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::target_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            KNOWN_KEYS.join(", ")
        ),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.template" => Ok(config.defaults.template.clone()),
        "defaults.install" => Ok(config.defaults.install.to_string()),
        "defaults.generate" => Ok(config.defaults.generate.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "templates.local_path" => Ok(config
            .templates
            .local_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "commands.generate" => Ok(config.commands.generate.join(" ")),
        "commands.package_manager" => Ok(config
            .commands
            .package_manager
            .clone()
            .unwrap_or_else(|| "auto".into())),
        _ => Err(unknown_key(key)),
    }
}

fn parse_config_value(key: &str, raw: &str) -> CliResult<Value> {
    let invalid = |reason: String| CliError::InvalidInput {
        message: format!("{key}: {reason}"),
        source: None,
    };

    match key {
        "defaults.install" | "defaults.generate" | "output.no_color" => raw
            .parse::<bool>()
            .map(Value::Boolean)
            .map_err(|_| invalid(format!("expected true or false, got '{raw}'"))),
        "commands.generate" => {
            let argv: Vec<Value> = raw
                .split_whitespace()
                .map(|s| Value::String(s.to_string()))
                .collect();
            if argv.is_empty() {
                return Err(invalid("command cannot be empty".into()));
            }
            Ok(Value::Array(argv))
        }
        "commands.package_manager" => {
            let manager: PackageManager = raw.parse()?;
            Ok(Value::String(manager.to_string()))
        }
        "output.format" => OutputFormat::from_str(raw, true)
            .map(|_| Value::String(raw.to_ascii_lowercase()))
            .map_err(|_| invalid(format!("expected auto, human, plain or json, got '{raw}'"))),
        "defaults.template" | "templates.local_path" => {
            if raw.trim().is_empty() {
                return Err(invalid("value cannot be empty".into()));
            }
            Ok(Value::String(raw.to_string()))
        }
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(table: &mut Table, key: &str, raw: &str) -> CliResult<()> {
    let value = parse_config_value(key, raw)?;
    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;

    let section_table = table
        .entry(section.to_string())
        .or_insert(Value::Table(Table::new()))
        .as_table_mut()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("'{section}' in the config file is not a table"),
            source: None,
        })?;
    section_table.insert(field.to_string(), value);
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_key_can_be_read() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn get_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.template").unwrap(), "typescript-yoga");
        assert_eq!(get_config_value(&cfg, "commands.generate").unwrap(), "npx graphqlgen");
        assert_eq!(get_config_value(&cfg, "commands.package_manager").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_sections_and_types_values() {
        let mut table = Table::new();
        set_config_value(&mut table, "defaults.install", "false").unwrap();
        set_config_value(&mut table, "commands.generate", "yarn graphqlgen").unwrap();
        set_config_value(&mut table, "commands.package_manager", "PNPM").unwrap();

        let cfg: AppConfig = toml::from_str(&toml::to_string(&table).unwrap()).unwrap();
        assert!(!cfg.defaults.install);
        assert_eq!(cfg.commands.generate, vec!["yarn", "graphqlgen"]);
        assert_eq!(cfg.commands.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(cfg.defaults.template, "typescript-yoga");
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut table = Table::new();
        assert!(matches!(
            set_config_value(&mut table, "defaults.install", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(set_config_value(&mut table, "commands.generate", "   ").is_err());
        assert!(set_config_value(&mut table, "commands.package_manager", "bun").is_err());
        assert!(set_config_value(&mut table, "output.format", "xml").is_err());
        assert!(matches!(
            set_config_value(&mut table, "nope.key", "x"),
            Err(CliError::ConfigError { .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn set_refuses_non_table_section() {
        let mut table: Table = toml::from_str("defaults = 3").unwrap();
        assert!(set_config_value(&mut table, "defaults.template", "flow-yoga").is_err());
    }
}
