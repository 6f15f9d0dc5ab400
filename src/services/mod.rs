//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `configuration.rs` — default synthesis, defensive merge, clamp, presets.
//! - `query.rs` — selected/visible section queries and the counter line.
//! - `compiler.rs` — configuration → instruction document.
//! - `session.rs` — live configuration owned by the shell (persist-and-update).
//! - `storage.rs` — best-effort persistence of the configuration blob.
//! - `clipboard.rs` — clipboard sink and copy status reporting.
//! - `preferences.rs` — `settings.toml` loading and catalog/style resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `configuration`, `query` and `compiler` are pure; they return new values.
//! - Side effects (files, child processes) stay in `storage` and `clipboard`.
//! - Keep command handlers thin; delegate to services.

pub mod clipboard;
pub mod compiler;
pub mod configuration;
pub mod output;
pub mod preferences;
pub mod query;
pub mod session;
pub mod storage;
