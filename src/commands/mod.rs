//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `diagnostics.rs` — the run/list command handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate query execution to `services/*`.
//! - Keep behavior and output schema stable.

pub mod diagnostics;

pub use diagnostics::{handle_list, handle_run};
