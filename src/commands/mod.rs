//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate core logic to `services/*`.
//! - Hand values to the output helpers; never write into the rendering
//!   surface from a service.

pub mod runtime;

pub use runtime::{handle_runtime_commands, MissingCredential};
