//! Template Service - catalog queries.
//!
//! Handles template lookup and listing over an explicit registry value.
//! Separated from ScaffoldOrchestrator for single responsibility.

use serde::Serialize;

use crate::{
    application::ScaffoldError,
    domain::{Template, TemplateRegistry},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub source: String,
    pub default: bool,
}

/// Service for template operations.
pub struct TemplateService {
    registry: TemplateRegistry,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a template name; `None` or `""` selects the default.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Template, ScaffoldError> {
        self.registry.resolve(name).map_err(ScaffoldError::from)
    }

    /// List all templates, in catalog order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        let default_name = self.registry.default_template().name();
        self.registry
            .templates()
            .iter()
            .map(|t| TemplateInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                source: t.source().label(),
                default: t.name() == default_name,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmbeddedFile, TemplateSource};

    static FILES: &[EmbeddedFile] = &[EmbeddedFile::new("package.json", "{}")];

    fn service() -> TemplateService {
        let templates = ["typescript-yoga", "flow-yoga"]
            .into_iter()
            .map(|n| Template::new(n, "GraphQL Yoga", TemplateSource::Embedded(FILES)).unwrap())
            .collect();
        TemplateService::new(TemplateRegistry::new(templates, "typescript-yoga").unwrap())
    }

    #[test]
    fn list_marks_exactly_one_default() {
        let infos = service().list();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos.iter().filter(|i| i.default).count(), 1);
        assert!(infos[0].default);
        assert_eq!(infos[1].source, "builtin");
    }

    #[test]
    fn resolve_maps_not_found_to_scaffold_error() {
        let err = service().resolve(Some("prisma")).unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::TemplateNotFound {
                name: "prisma".into(),
                available: vec!["typescript-yoga".into(), "flow-yoga".into()],
            }
        );
        assert_eq!(err.stage(), None);
    }
}
