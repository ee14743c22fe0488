//! Query parameter types for API handlers.

use dtp_core::types::EntityId;
use serde::Deserialize;

/// `GET /api/documents?projectId=`. The parameter is required; its absence
/// is reported by the handler rather than by the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListParams {
    pub project_id: Option<EntityId>,
}

/// `GET /api/templates?phase=`.
#[derive(Debug, Deserialize)]
pub struct TemplateListParams {
    pub phase: Option<String>,
}
