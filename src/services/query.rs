use crate::catalog::Registry;
use crate::domain::models::{Category, Configuration, SectionRow};

fn is_selected(config: &Configuration, id: &str) -> bool {
    config.selected.get(id).copied().unwrap_or(false)
}

pub fn selected_categories<'a>(registry: &'a Registry, config: &Configuration) -> Vec<&'a Category> {
    registry
        .categories()
        .iter()
        .filter(|c| is_selected(config, &c.id))
        .collect()
}

pub fn matches_filter(category: &Category, filter_text: &str) -> bool {
    let q = filter_text.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        category.id, category.title, category.description
    )
    .to_lowercase();
    haystack.contains(&q)
}

pub fn visible_categories<'a>(
    registry: &'a Registry,
    config: &Configuration,
    filter_text: &str,
    selected_only: bool,
) -> Vec<&'a Category> {
    registry
        .categories()
        .iter()
        .filter(|c| !selected_only || is_selected(config, &c.id))
        .filter(|c| matches_filter(c, filter_text))
        .collect()
}

pub fn section_count(registry: &Registry, config: &Configuration, shown: usize) -> String {
    let selected = registry
        .ids()
        .filter(|id| is_selected(config, id))
        .count();
    format!(
        "Showing {}/{} (selected {})",
        shown,
        registry.len(),
        selected
    )
}

pub fn section_rows(config: &Configuration, visible: &[&Category]) -> Vec<SectionRow> {
    visible
        .iter()
        .map(|c| SectionRow {
            id: c.id.clone(),
            title: c.title.clone(),
            description: c.description.clone(),
            recommended: c.recommended,
            sensitive: c.sensitive,
            selected: is_selected(config, &c.id),
        })
        .collect()
}
