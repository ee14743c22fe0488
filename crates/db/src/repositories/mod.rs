//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&Store` as the first argument. Public operations hold the store's
//! operation lock for their full duration.

pub mod document_repo;
pub mod project_repo;
pub mod template_repo;

pub use document_repo::DocumentRepo;
pub use project_repo::ProjectRepo;
pub use template_repo::TemplateRepo;
