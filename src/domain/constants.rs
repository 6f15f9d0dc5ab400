/// Versioned key of the persisted configuration blob. An incompatible schema
/// change picks a new key instead of migrating the old blob.
pub const STORAGE_KEY: &str = "profile_prompt_builder_v1";

/// Directory under `$HOME` holding the stored blob and `settings.toml`.
pub const APP_CONFIG_DIR: &str = ".config/profile-prompt";

pub const SETTINGS_FILE: &str = "settings.toml";

pub const MAX_ITEMS_MIN: i64 = 1;
pub const MAX_ITEMS_MAX: i64 = 25;
pub const DEFAULT_MAX_ITEMS: i64 = 10;

/// Category whose presence suppresses the open-questions fallback section.
pub const FOLLOW_UP_SECTION_ID: &str = "follow_up_questions";

pub const EMPTY_SELECTION_MESSAGE: &str = "Select at least one section to generate a prompt.";
pub const NO_MATCHING_SECTIONS_MESSAGE: &str = "No sections match your filter.";
