//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — node records, table grid, report/output structs.
//! - `constants.rs` — fixed deployment values (endpoint, header, parameter).
//!
//! ## Rule of thumb
//! Domain types are data-only: no network or rendering side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes explicit.

pub mod constants;
pub mod models;
