use std::path::Path;

use tracing::info;

use gqlstart_core::{application::ports::ModelGenerator, error::GqlResult};

use super::{CommandSpec, OutputMode, run};

/// Runs the model generator as an external command in the project root.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: CommandSpec,
    output: OutputMode,
}

impl CommandGenerator {
    pub fn new(command: CommandSpec) -> Self {
        Self {
            command,
            output: OutputMode::default(),
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }
}

impl Default for CommandGenerator {
    /// `npx graphqlgen`
    fn default() -> Self {
        Self::new(CommandSpec::new("npx", ["graphqlgen"]))
    }
}

impl ModelGenerator for CommandGenerator {
    fn generate(&self, project_root: &Path) -> GqlResult<()> {
        info!(command = %self.command, "Generating models");
        run(&self.command, project_root, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_graphqlgen_through_npx() {
        assert_eq!(CommandGenerator::default().command().to_string(), "npx graphqlgen");
    }

    #[cfg(unix)]
    #[test]
    fn generate_runs_inside_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let generator = CommandGenerator::new(CommandSpec::new(
            "sh",
            ["-c", "mkdir -p src/generated && touch src/generated/graphqlgen.ts"],
        ))
        .with_output(OutputMode::Capture);

        generator.generate(dir.path()).unwrap();
        assert!(dir.path().join("src/generated/graphqlgen.ts").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_generator_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            CommandGenerator::new(CommandSpec::new("false", Vec::<String>::new()))
                .with_output(OutputMode::Capture);
        assert!(generator.generate(dir.path()).is_err());
    }
}
