//! Editor kinds and their default document content.
//!
//! Templates marked as editor-owned (and a few form templates that a
//! specialized editor renders) start from a fixed content shape. The shape is
//! produced once, when a document is created without content.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::template::Template;
use crate::types::new_entity_id;

/// Journey map columns, left to right.
pub const JOURNEY_STAGES: [&str; 5] = ["Awareness", "Consideration", "Decision", "Service", "Loyalty"];

/// Journey map rows, top to bottom.
pub const JOURNEY_ROWS: [&str; 7] = [
    "Customer Actions",
    "Touchpoints",
    "Customer Experience",
    "Pain Points",
    "KPIs",
    "Business Goals",
    "Team(s) Involved",
];

/// Service blueprint lanes, top to bottom.
pub const BLUEPRINT_ROWS: [&str; 6] = [
    "emotions",
    "actions",
    "touchpoints",
    "frontstage",
    "backstage",
    "support",
];

/// Number of storyboard frames a new document starts with.
pub const DEFAULT_STORYBOARD_FRAMES: usize = 3;

const DEFAULT_FEEDBACK_QUESTIONS: [&str; 2] = [
    "What did you like about the prototype?",
    "What could be improved?",
];

/// Which editor owns the content shape of a template's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKind {
    /// Generic form: one string value per template section.
    Form,
    JourneyMap,
    IdeaCategorization,
    PaperPrototype,
    Storyboard,
    Feedback,
    BusinessModelCanvas,
    ServiceBlueprint,
    MindMap,
}

impl EditorKind {
    /// Resolve the editor for a template id. Unknown ids use [`EditorKind::Form`].
    pub fn for_template(template_id: &str) -> Self {
        match template_id {
            "user-journey-map" => Self::JourneyMap,
            "idea-categorization" => Self::IdeaCategorization,
            "paper-prototypes" => Self::PaperPrototype,
            "storyboarding" => Self::Storyboard,
            "feedback-form" => Self::Feedback,
            "business-model-canvas" => Self::BusinessModelCanvas,
            "service-blueprint" => Self::ServiceBlueprint,
            "mind-mapping" => Self::MindMap,
            _ => Self::Form,
        }
    }
}

/// Build the initial content for a new document of `template`.
pub fn default_content(template: &Template) -> Value {
    match EditorKind::for_template(&template.id) {
        EditorKind::Form | EditorKind::BusinessModelCanvas => empty_form(template),
        EditorKind::JourneyMap => journey_grid(),
        EditorKind::IdeaCategorization => idea_categories(),
        EditorKind::PaperPrototype | EditorKind::MindMap => json!({ "nodes": [], "edges": [] }),
        EditorKind::Storyboard => storyboard_frames(),
        EditorKind::Feedback => feedback_items(),
        EditorKind::ServiceBlueprint => blueprint_rows(),
    }
}

fn empty_form(template: &Template) -> Value {
    let fields: Map<String, Value> = template
        .content
        .sections()
        .iter()
        .map(|s| (s.id.clone(), Value::String(String::new())))
        .collect();
    Value::Object(fields)
}

fn journey_grid() -> Value {
    let grid: Map<String, Value> = JOURNEY_ROWS
        .iter()
        .map(|row| {
            let cells: Map<String, Value> = JOURNEY_STAGES
                .iter()
                .map(|stage| (stage.to_string(), Value::String(String::new())))
                .collect();
            (row.to_string(), Value::Object(cells))
        })
        .collect();
    json!({ "grid": grid })
}

fn idea_categories() -> Value {
    json!({
        "categories": [
            { "id": "uncategorized", "title": "Uncategorized Ideas", "items": [] },
            { "id": "cat-1", "title": "Blue (Now)", "items": [] },
            { "id": "cat-2", "title": "Yellow (How/Wow)", "items": [] },
            { "id": "cat-3", "title": "Red (Ciao)", "items": [] },
        ]
    })
}

fn storyboard_frames() -> Value {
    let frames: Vec<Value> = (0..DEFAULT_STORYBOARD_FRAMES)
        .map(|_| {
            json!({
                "id": new_entity_id().to_string(),
                "image": null,
                "context": "",
                "action": "",
                "outcome": "",
            })
        })
        .collect();
    json!({ "frames": frames })
}

fn feedback_items() -> Value {
    let items: Vec<Value> = DEFAULT_FEEDBACK_QUESTIONS
        .iter()
        .map(|question| {
            json!({
                "id": new_entity_id().to_string(),
                "question": question,
                "answer": "",
            })
        })
        .collect();
    json!({ "items": items })
}

fn blueprint_rows() -> Value {
    let rows: Map<String, Value> = BLUEPRINT_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let first = (i * 2 + 1) as u64;
            (
                row.to_string(),
                json!([{ "id": first, "text": "" }, { "id": first + 1, "text": "" }]),
            )
        })
        .collect();
    json!({ "rowItems": rows })
}
