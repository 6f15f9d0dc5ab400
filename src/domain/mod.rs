//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the category, configuration and report structs in one place.
//! - Avoid cyclic imports between services and command handlers.
//! - Make persisted/JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — category, configuration, settings and report structs.
//! - `constants.rs` — storage key, clamp bounds and fixed shell messages.
//! - `errors.rs` — typed failures surfaced with stable error codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! `Configuration` is persisted verbatim. Its camelCase field names are part
//! of the stored blob format; keep them stable or bump `STORAGE_KEY`.

pub mod constants;
pub mod errors;
pub mod models;
