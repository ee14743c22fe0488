//! Document entity model, DTOs, and joined views.

use dtp_core::template::Template;
use dtp_core::types::{EntityId, TemplateId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::project::Project;

/// A stored document: one filled-in template belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub project_id: EntityId,
    pub template_id: TemplateId,
    /// Arbitrary JSON object shaped by the template. Persisted as a
    /// JSON-encoded string.
    #[serde(with = "dtp_core::json_string")]
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a document. Omitted or `null` content is replaced by the
/// template's default content; anything else is stored as given.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    pub project_id: EntityId,
    pub template_id: TemplateId,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

/// DTO for replacing a document's content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocument {
    pub content: serde_json::Value,
}

/// A document with its template resolved. `template` is `None` when the
/// catalog no longer contains the referenced id.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentWithTemplate {
    #[serde(flatten)]
    pub document: Document,
    pub template: Option<Template>,
}

/// A document joined with both its template and its project.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub document: Document,
    pub template: Option<Template>,
    pub project: Option<Project>,
}
