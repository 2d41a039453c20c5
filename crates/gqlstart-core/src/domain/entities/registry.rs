//! Template registry: the catalog templates are resolved against.

use std::collections::HashSet;

use thiserror::Error;

use super::template::Template;
use crate::domain::error::DomainError;

/// Lookup failure. Carries everything a caller needs to tell the user what
/// they could have typed instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown template '{name}'. Available templates: {}", .available.join(", "))]
pub struct TemplateNotFound {
    pub name: String,
    pub available: Vec<String>,
}

/// Immutable catalog of templates with exactly one default.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    default_index: usize,
}

impl TemplateRegistry {
    /// Build a registry. Names must be unique and `default_name` must be one
    /// of them.
    pub fn new(templates: Vec<Template>, default_name: &str) -> Result<Self, DomainError> {
        if templates.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.name()) {
                return Err(DomainError::DuplicateTemplate {
                    name: template.name().to_string(),
                });
            }
        }

        let default_index = templates
            .iter()
            .position(|t| t.name() == default_name)
            .ok_or_else(|| DomainError::UnknownDefault {
                name: default_name.to_string(),
            })?;

        Ok(Self {
            templates,
            default_index,
        })
    }

    /// Return a new registry with `extra` appended. The default is unchanged.
    pub fn extend(self, extra: Vec<Template>) -> Result<Self, DomainError> {
        let default_name = self.default_template().name().to_string();
        let mut templates = self.templates;
        templates.extend(extra);
        Self::new(templates, &default_name)
    }

    /// Resolve a template by exact, case-sensitive name.
    ///
    /// `None` and `Some("")` both mean "no preference" and yield the default.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Template, TemplateNotFound> {
        match name {
            None | Some("") => Ok(self.default_template()),
            Some(name) => self
                .templates
                .iter()
                .find(|t| t.name() == name)
                .ok_or_else(|| TemplateNotFound {
                    name: name.to_string(),
                    available: self.names().into_iter().map(String::from).collect(),
                }),
        }
    }

    pub fn default_template(&self) -> &Template {
        &self.templates[self.default_index]
    }

    /// All names, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(Template::name).collect()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
