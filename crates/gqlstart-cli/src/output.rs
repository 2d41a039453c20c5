//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Plain line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable payload (JSON, CSV). Never suppressed.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    /// Step failure. Goes to stderr and ignores `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        Term::stderr().write_line(&self.paint(Status::Error, msg))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(status, msg))
    }

    /// `<symbol> <msg>`, colored per status unless color is off.
    fn paint(&self, status: Status, msg: &str) -> String {
        let symbol = status.symbol();
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        match status {
            Status::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Status::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Status::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Status::Info => format!("{} {}", symbol.blue().bold(), msg),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, no_color: bool, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn quiet_suppresses_print() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        let cfg = AppConfig::default();
        assert!(make_manager(OutputFormat::Human, false, &cfg).supports_color());
        assert!(!make_manager(OutputFormat::Human, true, &cfg).supports_color());
    }

    #[test]
    fn plain_and_json_never_color() {
        let cfg = AppConfig::default();
        assert!(!make_manager(OutputFormat::Plain, false, &cfg).supports_color());
        assert!(!make_manager(OutputFormat::Json, false, &cfg).supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "json".into();
        let out = make_manager(OutputFormat::Auto, false, &cfg);
        assert!(out.is_json());

        let flag_wins = make_manager(OutputFormat::Plain, false, &cfg);
        assert_eq!(flag_wins.format(), OutputFormat::Plain);
    }

    #[test]
    fn plain_status_lines_have_symbol_and_no_escapes() {
        let out = make_manager(OutputFormat::Plain, false, &AppConfig::default());
        assert_eq!(out.paint(Status::Success, "done"), "\u{2713} done");
        assert_eq!(out.paint(Status::Warning, "careful"), "\u{26a0} careful");
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        assert!(!make_manager(OutputFormat::Human, false, &cfg).supports_color());
    }
}
