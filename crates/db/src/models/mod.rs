//! Persisted entities and their DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the stored record
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO
//! - `Serialize`-only joined views for display

pub mod document;
pub mod project;
