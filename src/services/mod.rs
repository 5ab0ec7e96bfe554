//! Service layer containing the core logic and side-effect helpers.
//!
//! ## Service map
//! - `navigation.rs` — credential extraction + query-string construction.
//! - `gateway.rs` — verify/list requests against the remote gateway.
//! - `table.rs` — pure record-to-grid transform and text rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects (the two network calls) are explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod gateway;
pub mod navigation;
pub mod output;
pub mod table;
