//! Implementation of the `gqlstart list` command.

use gqlstart_core::{application::TemplateInfo, error::GqlError};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let templates = super::template_service(&config)?.list();

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for t in &templates {
                output.data(&t.name)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&templates).map_err(|e| GqlError::Internal {
                message: format!("Failed to serialise templates: {e}"),
            })?;
            output.data(&json)?;
        }
        ListFormat::Csv => {
            output.data("name,description,source,default")?;
            for t in &templates {
                output.data(&format!(
                    "{},{},{},{}",
                    csv_field(&t.name),
                    csv_field(&t.description),
                    csv_field(&t.source),
                    t.default
                ))?;
            }
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            let marker = if t.default { " (default)" } else { "" };
            format!("  {:width$}  {}{marker}", t.name, t.description)
        })
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, default: bool) -> TemplateInfo {
        TemplateInfo {
            name: name.into(),
            description: "desc".into(),
            source: "builtin".into(),
            default,
        }
    }

    #[test]
    fn table_aligns_names_and_marks_default() {
        let rows = table_rows(&[info("flow-yoga", false), info("typescript-yoga", true)]);
        assert_eq!(rows[0], "  flow-yoga        desc");
        assert_eq!(rows[1], "  typescript-yoga  desc (default)");
    }

    #[test]
    fn csv_quotes_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
