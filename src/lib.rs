//! Personal-profile prompt builder.
//!
//! The engine (`catalog`, `services::{configuration, query, compiler}`) is
//! pure; `services::session` is the shell-side owner of the live
//! configuration, and `commands` wires it to the command line.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use catalog::Registry;
pub use cli::*;
pub use domain::constants::*;
pub use domain::errors::{error_code, CatalogError, ProfileError};
pub use domain::models::*;
pub use services::clipboard::{copy_to_clipboard, ClipboardSink, CommandClipboard};
pub use services::compiler::{build_document, document_digest};
pub use services::configuration::{build_default, clamp_number, merge, parse_max_items};
pub use services::output::{print_error, print_one, print_out};
pub use services::preferences::{load_settings, resolve_registry, resolve_style};
pub use services::query::{
    matches_filter, section_count, section_rows, selected_categories, visible_categories,
};
pub use services::session::{Rendered, Session};
pub use services::storage::{default_store, ConfigStore, FileStore, MemoryStore};

/// Entry point shared by the binary: settings → catalog → session → command.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings()?;

    if commands::handle_catalog_commands(cli)? {
        return Ok(());
    }

    let registry = resolve_registry(cli, &settings)?;
    let style = resolve_style(cli, &settings);
    log::debug!(
        "catalog {} ({} sections), style {}",
        registry.name(),
        registry.len(),
        style.as_str()
    );

    let mut session = Session::open(registry, default_store());

    if commands::handle_config_commands(cli, &mut session)? {
        return Ok(());
    }
    commands::handle_runtime_commands(cli, &mut session, &settings, style)
}
