//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — catalog and stored-configuration command trees.
//! - `runtime.rs` — prompt/sections/select/deselect/preset/set.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_catalog_commands, handle_config_commands};
pub use runtime::handle_runtime_commands;
