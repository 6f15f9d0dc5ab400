use crate::cli::CatalogKind;
use crate::domain::errors::{CatalogError, ProfileError};
use crate::domain::models::{CatalogFile, CatalogSummary, Category};
use std::collections::HashSet;
use std::path::Path;

const CLASSIC_JSON: &str = include_str!("../catalogs/classic.json");
const EXTENDED_JSON: &str = include_str!("../catalogs/extended.json");

/// Ordered, validated set of categories. The single source of truth for which
/// ids may appear in a configuration.
#[derive(Debug, Clone)]
pub struct Registry {
    name: String,
    categories: Vec<Category>,
}

impl Registry {
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let name = name.into();
        if categories.is_empty() {
            return Err(CatalogError::Empty(name));
        }
        {
            let mut seen = HashSet::new();
            for c in &categories {
                if c.id.trim().is_empty() {
                    return Err(CatalogError::BlankId(name));
                }
                if !seen.insert(c.id.as_str()) {
                    return Err(CatalogError::DuplicateId(c.id.clone()));
                }
            }
        }
        Ok(Self { name, categories })
    }

    pub fn builtin(kind: CatalogKind) -> anyhow::Result<Self> {
        let raw = match kind {
            CatalogKind::Classic => CLASSIC_JSON,
            CatalogKind::Extended => EXTENDED_JSON,
        };
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self::new(file.name, file.categories)?)
    }

    /// Loads a catalog from `.toml` or `.json`; any other extension is read as JSON.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let invalid = |reason: String| ProfileError::InvalidCatalog {
            path: path.display().to_string(),
            reason,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let is_toml = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let file: CatalogFile = if is_toml {
            toml::from_str(&raw).map_err(|e| invalid(e.to_string()))?
        } else {
            serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?
        };
        let registry =
            Self::new(file.name, file.categories).map_err(|e| invalid(e.to_string()))?;
        log::debug!(
            "loaded catalog {} ({} categories) from {}",
            registry.name,
            registry.categories.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Always at least 1: `new` rejects an empty catalog.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            name: self.name.clone(),
            total: self.categories.len(),
            recommended: self.categories.iter().filter(|c| c.recommended).count(),
            sensitive: self.categories.iter().filter(|c| c.sensitive).count(),
        }
    }
}
