//! Service layer containing the extraction engine and the stream converter.
//!
//! ## Service map
//! - `source.rs` — reading and parsing one YAML document from a file.
//! - `extract.rs` — dot-path splitting and traversal over a parsed document.
//! - `render.rs` — scalar/block rendering of a resolved value.
//! - `convert.rs` — YAML document stream to compact JSON lines.
//!
//! ## Conventions
//! - Services are pure where possible; the command layer owns process
//!   streams and exit codes.
//! - "Not found" is a value, not an error; only genuine failures use
//!   `ExtractError`.

pub mod convert;
pub mod extract;
pub mod render;
pub mod source;
