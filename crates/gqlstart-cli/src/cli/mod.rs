//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gqlstart",
    bin_name = "gqlstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bootstrap a graphqlgen project from a template",
    long_about = "gqlstart copies a GraphQL server template into a directory, \
                  runs the graphqlgen model generator and installs dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 gqlstart new my-server\n\
        \x20 gqlstart new my-server --template flow-yoga\n\
        \x20 gqlstart new . --no-install --no-generate\n\
        \x20 gqlstart list\n\
        \x20 gqlstart completions bash > /usr/share/bash-completion/completions/gqlstart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new GraphQL server project",
        after_help = "EXAMPLES:\n\
            \x20 gqlstart new my-server\n\
            \x20 gqlstart new my-server -t typescript-apollo\n\
            \x20 gqlstart new existing-dir --force\n\
            \x20 gqlstart new my-server --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 gqlstart list\n\
            \x20 gqlstart list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gqlstart init\n\
            \x20 gqlstart init --force\n\
            \x20 gqlstart --config ./gqlstart.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gqlstart completions bash > ~/.local/share/bash-completion/completions/gqlstart\n\
            \x20 gqlstart completions zsh  > ~/.zfunc/_gqlstart\n\
            \x20 gqlstart completions fish > ~/.config/fish/completions/gqlstart.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the gqlstart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gqlstart config get defaults.template\n\
            \x20 gqlstart config set defaults.template flow-yoga\n\
            \x20 gqlstart config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Commands that create or rewrite the config file, so `--config FILE`
    /// may name a file that does not exist yet.
    pub fn writes_config(&self) -> bool {
        matches!(
            self,
            Self::Init(_) | Self::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
        )
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `gqlstart new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory to create the project in. Defaults to the current directory.
    #[arg(value_name = "DIR", help = "Target directory (default: current directory)")]
    pub dir: Option<PathBuf>,

    /// Template to use.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME",
        help = "Template name (see `gqlstart list`)"
    )]
    pub template: Option<String>,

    /// Skip dependency installation.
    #[arg(long = "no-install", help = "Skip installing dependencies")]
    pub no_install: bool,

    /// Skip model generation.
    #[arg(long = "no-generate", help = "Skip running graphqlgen")]
    pub no_generate: bool,

    /// Scaffold into a non-empty directory (existing files may be overwritten).
    #[arg(
        short = 'f',
        long = "force",
        help = "Scaffold even if the directory is not empty"
    )]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gqlstart list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gqlstart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gqlstart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gqlstart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
