use crate::catalog::Registry;
use crate::cli::{CatalogKind, Cli, PromptStyle};
use crate::domain::constants::SETTINGS_FILE;
use crate::domain::errors::ProfileError;
use crate::domain::models::SettingsFile;
use crate::services::storage::app_config_dir;
use std::path::Path;

pub fn load_settings() -> anyhow::Result<SettingsFile> {
    let Ok(dir) = app_config_dir() else {
        return Ok(SettingsFile::default());
    };
    load_settings_from(&dir.join(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let invalid = |reason: String| ProfileError::InvalidSettings {
        path: path.display().to_string(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    Ok(toml::from_str(&raw).map_err(|e| invalid(e.to_string()))?)
}

/// Command-line flag, then settings file, then the classic catalog.
pub fn resolve_registry(cli: &Cli, settings: &SettingsFile) -> anyhow::Result<Registry> {
    if let Some(path) = cli
        .catalog_file
        .as_deref()
        .or(settings.general.catalog_file.as_deref())
    {
        return Registry::from_path(Path::new(path));
    }
    let kind = cli
        .catalog
        .or(settings.general.catalog)
        .unwrap_or(CatalogKind::Classic);
    Registry::builtin(kind)
}

pub fn resolve_style(cli: &Cli, settings: &SettingsFile) -> PromptStyle {
    cli.style.or(settings.general.style).unwrap_or_default()
}
