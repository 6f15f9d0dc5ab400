use crate::cli::{CatalogKind, PromptStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One disclosure topic. Categories differ only by data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub recommended: bool,
    #[serde(default)]
    pub sensitive: bool,
}

/// On-disk shape of a catalog (`catalogs/*.json` or a user-supplied file).
#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogFile {
    pub name: String,
    pub categories: Vec<Category>,
}

/// The user's live selection plus disclosure policy flags.
///
/// Persisted verbatim, so field names follow the stored blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub selected: BTreeMap<String, bool>,
    pub include_inferred: bool,
    pub include_confidence: bool,
    pub exclude_sensitive: bool,
    pub max_items: i64,
}

/// Partial update of the scalar policy fields; `None` leaves a field as is.
#[derive(Debug, Default, Clone)]
pub struct FlagUpdate {
    pub include_inferred: Option<bool>,
    pub include_confidence: Option<bool>,
    pub exclude_sensitive: Option<bool>,
    pub max_items: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SettingsFile {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct GeneralSettings {
    #[serde(default)]
    pub catalog: Option<CatalogKind>,
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default)]
    pub style: Option<PromptStyle>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ClipboardSettings {
    /// Program plus arguments; the document is written to its stdin.
    #[serde(default)]
    pub command: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct SectionRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub recommended: bool,
    pub sensitive: bool,
    pub selected: bool,
}

#[derive(Serialize)]
pub struct SectionListing {
    pub shown: usize,
    pub total: usize,
    pub selected: usize,
    pub summary: String,
    pub sections: Vec<SectionRow>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

#[derive(Serialize)]
pub struct PromptReport {
    /// False when the empty-selection message was returned instead of a document.
    pub ready: bool,
    pub style: String,
    pub catalog: String,
    pub section_ids: Vec<String>,
    pub sha256: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_status: Option<StatusLine>,
}

#[derive(Serialize)]
pub struct MutationReport {
    pub status: String,
    pub configuration: Configuration,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogSummary {
    pub name: String,
    pub total: usize,
    pub recommended: usize,
    pub sensitive: usize,
}
