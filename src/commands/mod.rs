//! Command handler layer.
//!
//! This module owns process streams, exit codes and the fallback policy.
//!
//! ## Files
//! - `extract.rs` — dot-path extraction with the `--default` policy.
//! - `convert.rs` — YAML stream to JSON lines.
//!
//! ## Principles
//! - Keep handlers thin; delegate engine work to `services/*`.
//! - Keep the exit-code and stdout/stderr contract stable.

pub mod convert;
pub mod extract;

pub use convert::handle_convert;
pub use extract::handle_extract;
