//! Negotiation template library
//!
//! Templates are authored in YAML (see `templates/negotiation-templates.yaml`)
//! and loaded once. Declaration order matters: when two templates share an
//! objection/stage/strategy key, the first one wins.

use std::collections::HashMap;
use std::path::Path;

use dealdesk_core::DealDeskError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::input::{NegotiationStage, ObjectionType, Strategy};

/// Environment variable naming an alternative template file
pub const TEMPLATES_PATH_ENV: &str = "DEALDESK_TEMPLATES_PATH";

/// Library compiled into the crate
const DEFAULT_TEMPLATES_YAML: &str = include_str!("../templates/negotiation-templates.yaml");

static DEFAULT_LIBRARY: Lazy<TemplateLibrary> = Lazy::new(|| {
    TemplateLibrary::from_yaml(DEFAULT_TEMPLATES_YAML)
        .expect("embedded negotiation templates must be valid")
});

/// A single authored response template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    /// Empty for fallbacks
    #[serde(default)]
    pub objection_types: Vec<ObjectionType>,
    pub strategy: Strategy,
    #[serde(default)]
    pub stage: Vec<NegotiationStage>,
    pub subject: String,
    pub body: String,
    pub when_to_use: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Template {
    pub fn matches(
        &self,
        objection: ObjectionType,
        stage: NegotiationStage,
        strategy: Strategy,
    ) -> bool {
        self.strategy == strategy
            && self.objection_types.contains(&objection)
            && self.stage.contains(&stage)
    }
}

/// Lookup contract the selector depends on
pub trait TemplateSource: Send + Sync {
    /// Matching templates in declaration order (possibly empty)
    fn find(
        &self,
        objection: ObjectionType,
        stage: NegotiationStage,
        strategy: Strategy,
    ) -> Vec<&Template>;

    /// Universal default for a strategy
    fn fallback(&self, strategy: Strategy) -> Option<&Template>;
}

/// Top-level template file structure
#[derive(Debug, Clone, Deserialize)]
struct TemplatesFile {
    version: String,
    templates: Vec<Template>,
    fallbacks: Vec<Template>,
}

/// Validated, read-only template library
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    version: String,
    templates: Vec<Template>,
    fallbacks: HashMap<Strategy, Template>,
}

impl TemplateLibrary {
    /// Build a library, requiring one fallback per strategy
    pub fn new(
        version: impl Into<String>,
        templates: Vec<Template>,
        fallbacks: Vec<Template>,
    ) -> Result<Self, DealDeskError> {
        for template in &templates {
            if template.objection_types.is_empty() {
                return Err(DealDeskError::InvalidTemplate {
                    id: template.id.clone(),
                    reason: "empty objectionTypes set".to_string(),
                });
            }
            if template.stage.is_empty() {
                return Err(DealDeskError::InvalidTemplate {
                    id: template.id.clone(),
                    reason: "empty stage set".to_string(),
                });
            }
        }

        let mut by_strategy = HashMap::new();
        for fallback in fallbacks {
            // First fallback declared for a strategy wins, like templates
            by_strategy.entry(fallback.strategy).or_insert(fallback);
        }
        for strategy in Strategy::ALL {
            if !by_strategy.contains_key(&strategy) {
                return Err(DealDeskError::MissingFallback(strategy.to_string()));
            }
        }

        Ok(Self {
            version: version.into(),
            templates,
            fallbacks: by_strategy,
        })
    }

    /// Parse a library from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, DealDeskError> {
        let file: TemplatesFile = serde_yaml::from_str(yaml)
            .map_err(|e| DealDeskError::TemplateParse(e.to_string()))?;
        Self::new(file.version, file.templates, file.fallbacks)
    }

    /// Load a library from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DealDeskError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DealDeskError::TemplateRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let library = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            templates = library.len(),
            version = %library.version,
            "loaded negotiation templates"
        );
        Ok(library)
    }

    /// Load from `DEALDESK_TEMPLATES_PATH` when set, else the embedded library
    pub fn from_env() -> Result<Self, DealDeskError> {
        match std::env::var(TEMPLATES_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(default_library().clone()),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of authored templates, not counting fallbacks
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Authored templates in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn templates_for(&self, strategy: Strategy) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| t.strategy == strategy)
    }
}

impl TemplateSource for TemplateLibrary {
    fn find(
        &self,
        objection: ObjectionType,
        stage: NegotiationStage,
        strategy: Strategy,
    ) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.matches(objection, stage, strategy))
            .collect()
    }

    fn fallback(&self, strategy: Strategy) -> Option<&Template> {
        self.fallbacks.get(&strategy)
    }
}

/// The library embedded at compile time, shared process-wide
pub fn default_library() -> &'static TemplateLibrary {
    &DEFAULT_LIBRARY
}
