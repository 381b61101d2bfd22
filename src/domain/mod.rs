//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain types
//! - `wire.rs` — raw serde structs matching request/response payloads (where needed)
//! - `client.rs` — sub-client with the HTTP calls

pub mod order;
pub mod profile;
