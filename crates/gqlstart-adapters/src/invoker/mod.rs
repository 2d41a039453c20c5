//! Process-spawning implementations of the generation and installation ports.
//!
//! Both invokers run one external command with the project root as working
//! directory. Stdin is always closed so a prompting tool cannot hang the run.

mod generator;
mod installer;

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use gqlstart_core::error::{GqlError, GqlResult};

pub use generator::CommandGenerator;
pub use installer::{PackageManager, PackageManagerInstaller};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from an argv list such as `["npx", "graphqlgen"]`.
    pub fn from_argv(argv: &[String]) -> GqlResult<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| GqlError::Configuration {
            message: "command line cannot be empty".into(),
        })?;
        if program.trim().is_empty() {
            return Err(GqlError::Configuration {
                message: "command program cannot be blank".into(),
            });
        }
        Ok(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What happens to a child's stdout and stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream straight to the terminal.
    #[default]
    Inherit,
    /// Collect; stderr becomes the failure reason.
    Capture,
}

#[instrument(skip_all, fields(command = %spec, cwd = %cwd.display()))]
pub(crate) fn run(spec: &CommandSpec, cwd: &Path, mode: OutputMode) -> GqlResult<()> {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args).current_dir(cwd).stdin(Stdio::null());

    let command_error = |reason: String| GqlError::Command {
        command: spec.to_string(),
        reason,
    };

    match mode {
        OutputMode::Inherit => {
            let status = command
                .status()
                .map_err(|e| command_error(format!("could not start: {e}")))?;
            if !status.success() {
                return Err(command_error(format!("exited with {status}")));
            }
        }
        OutputMode::Capture => {
            let output = command
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .map_err(|e| command_error(format!("could not start: {e}")))?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let reason = match stderr.trim() {
                    "" => format!("exited with {}", output.status),
                    trimmed => trimmed.to_string(),
                };
                return Err(command_error(reason));
            }
        }
    }

    debug!("command finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("npx", ["graphqlgen", "--verbose"]);
        assert_eq!(spec.to_string(), "npx graphqlgen --verbose");
    }

    #[test]
    fn from_argv_splits_program() {
        let argv = vec!["yarn".to_string(), "gen".to_string()];
        let spec = CommandSpec::from_argv(&argv).unwrap();
        assert_eq!(spec.program(), "yarn");
        assert_eq!(spec.args(), ["gen".to_string()]);
    }

    #[test]
    fn from_argv_rejects_empty() {
        assert!(matches!(
            CommandSpec::from_argv(&[]),
            Err(GqlError::Configuration { .. })
        ));
        assert!(CommandSpec::from_argv(&[" ".to_string()]).is_err());
    }

    #[test]
    fn missing_program_is_a_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("gqlstart-no-such-program", Vec::<String>::new());
        let err = run(&spec, dir.path(), OutputMode::Capture).unwrap_err();
        assert!(matches!(err, GqlError::Command { ref command, .. } if command == "gqlstart-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn captured_stderr_becomes_reason() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "echo '  boom  ' >&2; exit 3"]);
        let err = run(&spec, dir.path(), OutputMode::Capture).unwrap_err();
        match err {
            GqlError::Command { reason, .. } => assert_eq!(reason, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn silent_failure_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "exit 7"]);
        let err = run(&spec, dir.path(), OutputMode::Capture).unwrap_err();
        match err {
            GqlError::Command { reason, .. } => assert!(reason.contains('7'), "{reason}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "touch ran-here"]);
        run(&spec, dir.path(), OutputMode::Capture).unwrap();
        assert!(dir.path().join("ran-here").exists());
    }
}
