//! Template model: workflow phases, form sections, and template content.
//!
//! A template is either a generic form (an ordered list of labelled input
//! sections) or a marker saying that a specialized editor owns the shape of
//! documents created from it. See [`crate::editor`] for the latter.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::TemplateId;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Design-thinking workflow stage. Used only for grouping templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Empathize,
    Define,
    Ideate,
    Prototype,
    Test,
    Other,
}

impl Phase {
    /// Every phase in workflow order.
    pub const ALL: [Phase; 6] = [
        Phase::Empathize,
        Phase::Define,
        Phase::Ideate,
        Phase::Prototype,
        Phase::Test,
        Phase::Other,
    ];

    /// Parse a phase name, ignoring ASCII case.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid phase '{s}'. Must be one of: Empathize, Define, Ideate, Prototype, Test, Other"
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empathize => "Empathize",
            Self::Define => "Define",
            Self::Ideate => "Ideate",
            Self::Prototype => "Prototype",
            Self::Test => "Test",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Input widget used for a form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
}

/// One labelled input of a form template. `id` is the key under which the
/// value is stored in document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// Structural description carried by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateContent {
    /// A generic field-based form.
    Form { sections: Vec<Section> },
    /// A specialized editor owns the structure and initializes its own
    /// default shape on first use.
    Editor { description: String },
}

impl TemplateContent {
    /// Form sections, or an empty slice for editor-owned templates.
    pub fn sections(&self) -> &[Section] {
        match self {
            Self::Form { sections } => sections,
            Self::Editor { .. } => &[],
        }
    }
}

/// A read-only document template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    /// Persisted as a JSON-encoded string.
    #[serde(with = "crate::json_string")]
    pub content: TemplateContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn phase_parse_is_case_insensitive() {
        assert_eq!(Phase::parse("ideate").unwrap(), Phase::Ideate);
        assert_eq!(Phase::parse("TEST").unwrap(), Phase::Test);
        assert_eq!(Phase::parse(" Other ").unwrap(), Phase::Other);
    }

    #[test]
    fn phase_parse_rejects_unknown() {
        assert!(matches!(
            Phase::parse("Deploy"),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn phase_round_trips_through_as_str() {
        for phase in Phase::ALL {
            assert_eq!(Phase::parse(phase.as_str()).unwrap(), phase);
        }
    }

    #[test]
    fn form_content_decodes_sections() {
        let content: TemplateContent = serde_json::from_value(json!({
            "sections": [
                {"id": "says", "label": "Says", "type": "textarea", "placeholder": "Quotes"},
                {"id": "s", "label": "Substitute", "type": "text"}
            ]
        }))
        .unwrap();

        let sections = content.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, FieldKind::Textarea);
        assert_eq!(sections[1].placeholder, None);
    }

    #[test]
    fn editor_marker_has_no_sections() {
        let content: TemplateContent = serde_json::from_value(json!({
            "description": "The editor will initialize default frames."
        }))
        .unwrap();
        assert!(matches!(content, TemplateContent::Editor { .. }));
        assert!(content.sections().is_empty());
    }

    #[test]
    fn template_content_is_double_encoded() {
        let template = Template {
            id: "t".into(),
            title: "T".into(),
            description: String::new(),
            phase: Phase::Define,
            content: TemplateContent::Editor {
                description: "x".into(),
            },
        };
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["content"], json!("{\"description\":\"x\"}"));
        assert_eq!(value["phase"], json!("Define"));
    }
}
