use crate::catalog::Registry;
use crate::cli::{Preset, PromptStyle};
use crate::domain::constants::EMPTY_SELECTION_MESSAGE;
use crate::domain::errors::ProfileError;
use crate::domain::models::{Category, Configuration, FlagUpdate};
use crate::services::compiler::build_document;
use crate::services::configuration::{
    apply_flags, build_default, merge, preset_selection, preset_status,
};
use crate::services::query::{section_count, selected_categories, visible_categories};
use crate::services::storage::ConfigStore;

/// Result of a render: either a compiled document or the empty-selection text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub ready: bool,
    pub text: String,
}

/// Shell-side owner of the live configuration. Every mutation is saved.
pub struct Session<S: ConfigStore> {
    registry: Registry,
    config: Configuration,
    store: S,
}

impl<S: ConfigStore> Session<S> {
    /// Merges whatever the store holds onto the defaults and re-saves the
    /// normalized result.
    pub fn open(registry: Registry, store: S) -> Self {
        let base = build_default(&registry);
        let config = merge(&base, store.load().as_ref());
        let session = Self {
            registry,
            config,
            store,
        };
        session.persist();
        session
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn persist(&self) -> bool {
        self.store.save(&self.config)
    }

    pub fn toggle(&mut self, id: &str, checked: bool) -> Result<(), ProfileError> {
        if !self.registry.contains(id) {
            return Err(ProfileError::UnknownSection(id.to_string()));
        }
        self.config.selected.insert(id.to_string(), checked);
        log::debug!("section {} -> {}", id, checked);
        self.persist();
        Ok(())
    }

    /// Toggles several ids; validates all of them before changing anything.
    pub fn toggle_many(&mut self, ids: &[String], checked: bool) -> Result<(), ProfileError> {
        if let Some(unknown) = ids.iter().find(|id| !self.registry.contains(id)) {
            return Err(ProfileError::UnknownSection(unknown.clone()));
        }
        for id in ids {
            self.config.selected.insert(id.clone(), checked);
        }
        self.persist();
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: Preset) -> &'static str {
        self.config.selected = preset_selection(&self.registry, preset);
        self.persist();
        preset_status(preset)
    }

    pub fn update_flags(&mut self, update: &FlagUpdate) {
        self.config = apply_flags(&self.config, update);
        self.persist();
    }

    pub fn reset(&mut self) {
        self.config = build_default(&self.registry);
        self.persist();
    }

    pub fn selected(&self) -> Vec<&Category> {
        selected_categories(&self.registry, &self.config)
    }

    pub fn visible(&self, filter_text: &str, selected_only: bool) -> Vec<&Category> {
        visible_categories(&self.registry, &self.config, filter_text, selected_only)
    }

    pub fn section_count(&self, shown: usize) -> String {
        section_count(&self.registry, &self.config, shown)
    }

    /// Compiles the document, or returns the fixed prompt when nothing is selected.
    pub fn render(&self, style: PromptStyle) -> Rendered {
        let chosen = self.selected();
        if chosen.is_empty() {
            return Rendered {
                ready: false,
                text: EMPTY_SELECTION_MESSAGE.to_string(),
            };
        }
        Rendered {
            ready: true,
            text: build_document(&self.config, &chosen, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CatalogKind;
    use crate::services::storage::MemoryStore;

    fn classic() -> Registry {
        Registry::builtin(CatalogKind::Classic).unwrap()
    }

    #[test]
    fn open_normalizes_and_saves_stored_blob() {
        let store = MemoryStore::with_blob(
            r#"{"selected":{"food":true,"retired_section":true},"maxItems":40,"includeInferred":"nope"}"#,
        );
        let session = Session::open(classic(), store);
        assert!(session.config().selected["food"]);
        assert_eq!(session.config().max_items, 25);
        assert!(session.config().include_inferred);

        let saved = session.store().blob().unwrap();
        assert!(!saved.contains("retired_section"));
        assert!(saved.contains("\"maxItems\":25"));
    }

    #[test]
    fn overflowing_max_items_keeps_stored_selection() {
        let store = MemoryStore::with_blob(
            r#"{"selected":{"food":true,"working_style":false},"maxItems":1e400}"#,
        );
        let session = Session::open(classic(), store);
        assert!(session.config().selected["food"]);
        assert!(!session.config().selected["working_style"]);
        assert_eq!(session.config().max_items, 10);
    }

    #[test]
    fn unknown_ids_are_rejected_without_side_effects() {
        let mut session = Session::open(classic(), MemoryStore::default());
        let before = session.config().clone();
        let err = session
            .toggle_many(&["food".to_string(), "made_up".to_string()], true)
            .unwrap_err();
        assert!(matches!(err, ProfileError::UnknownSection(ref id) if id == "made_up"));
        assert_eq!(session.config(), &before);
        assert!(session.toggle("made_up", true).is_err());
    }

    #[test]
    fn clear_all_short_circuits_render() {
        let mut session = Session::open(classic(), MemoryStore::default());
        assert_eq!(session.apply_preset(Preset::Clear), "Cleared selection.");
        let rendered = session.render(PromptStyle::Concise);
        assert!(!rendered.ready);
        assert_eq!(
            rendered.text,
            "Select at least one section to generate a prompt."
        );
    }

    #[test]
    fn toggles_persist_across_sessions() {
        let mut session = Session::open(classic(), MemoryStore::default());
        session.toggle("goals_projects", true).unwrap();
        session.toggle("working_style", false).unwrap();
        let blob = session.store().blob().unwrap();

        let reopened = Session::open(classic(), MemoryStore::with_blob(blob));
        assert!(reopened.config().selected["goals_projects"]);
        assert!(!reopened.config().selected["working_style"]);
        assert_eq!(reopened.section_count(3), "Showing 3/17 (selected 6)");
    }

    #[test]
    fn stored_blob_survives_catalog_growth() {
        let mut small = Session::open(classic(), MemoryStore::default());
        small.apply_preset(Preset::All);
        let blob = small.store().blob().unwrap();

        let extended = Registry::builtin(CatalogKind::Extended).unwrap();
        let grown = Session::open(extended, MemoryStore::with_blob(blob));
        // ids shared with the old catalog keep the stored value
        assert!(grown.config().selected["food"]);
        // new ids get their recommended default
        assert!(grown.config().selected["coding"]);
        assert!(!grown.config().selected["education"]);
        assert_eq!(grown.config().selected.len(), 26);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::open(classic(), MemoryStore::default());
        session.update_flags(&FlagUpdate {
            include_inferred: Some(false),
            max_items: Some("3".to_string()),
            ..FlagUpdate::default()
        });
        assert_eq!(session.config().max_items, 3);
        session.reset();
        assert_eq!(session.config(), &build_default(session.registry()));
    }
}
