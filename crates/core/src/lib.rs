//! Domain layer of the Design Thinking Platform.
//!
//! Pure types and logic with no I/O: the template model and built-in
//! catalog, per-editor default content, the auto-bullet list codec, the
//! render contract, and input validation.

pub mod bullets;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod json_string;
pub mod render;
pub mod template;
pub mod types;
pub mod validation;
