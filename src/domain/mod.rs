//! Shared data model layer (outcome and error types only).
//!
//! ## Files
//! - `models.rs` — extraction outcome and the closed error taxonomy.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem or stream side effects.

pub mod models;
