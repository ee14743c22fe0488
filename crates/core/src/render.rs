//! Render contract for document previews and exports.
//!
//! [`render`] maps a template and a document's content to a layout tree that
//! a presentation layer paints and captures. It is a pure function: the same
//! `(template, content)` always yields the same tree.

use serde::Serialize;
use serde_json::Value;

use crate::bullets;
use crate::template::Template;

/// Footer line printed under every exported document.
pub const FOOTER: &str = "Generated by Design Thinking Platform";

/// Root of a rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub layout: Layout,
    pub footer: &'static str,
}

/// A titled block of text. `body` is `None` when the field is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub label: String,
    pub body: Option<String>,
}

/// A short labelled attribute, e.g. a persona's age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// Per-template visual arrangement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Two-by-two grid around a centred label (empathy map).
    Quadrants { center: String, cells: Vec<Panel> },
    /// Persona card: avatar initial, headline, facts, and text panels.
    Profile {
        initial: String,
        name: String,
        facts: Vec<Fact>,
        panels: Vec<Panel>,
    },
    /// Numbered list of non-empty lines.
    NumberedList { heading: String, items: Vec<String> },
    /// One card per template section, in template order.
    Sections { panels: Vec<Panel> },
    /// Editor-owned content without a form layout.
    Raw { content: Value },
}

/// Render `content` as laid out for `template`.
pub fn render(template: &Template, content: &Value) -> RenderTree {
    let layout = match template.id.as_str() {
        "empathy-map" => empathy_map(content),
        "user-persona" => persona(content),
        "questionnaire" => questionnaire(content),
        _ if template.content.sections().is_empty() => Layout::Raw {
            content: content.clone(),
        },
        _ => sections(template, content),
    };

    RenderTree {
        template_id: template.id.clone(),
        title: template.title.clone(),
        description: template.description.clone(),
        layout,
        footer: FOOTER,
    }
}

/// Text stored under `key`, or `None` when absent or blank.
fn field(content: &Value, key: &str) -> Option<String> {
    match content.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn panel(content: &Value, label: &str, key: &str) -> Panel {
    Panel {
        label: label.to_string(),
        body: field(content, key),
    }
}

fn empathy_map(content: &Value) -> Layout {
    Layout::Quadrants {
        center: "USER".to_string(),
        cells: vec![
            panel(content, "Says", "says"),
            panel(content, "Thinks", "thinks"),
            panel(content, "Does", "does"),
            panel(content, "Feels", "feels"),
        ],
    }
}

fn persona(content: &Value) -> Layout {
    let name = field(content, "name");
    let initial = name
        .as_deref()
        .unwrap_or("User")
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    let facts = [
        ("Age", "age"),
        ("Gender", "gender"),
        ("Occupation", "occupation"),
        ("Location", "location"),
    ]
    .into_iter()
    .map(|(label, key)| Fact {
        label: label.to_string(),
        value: field(content, key).unwrap_or_else(|| "N/A".to_string()),
    })
    .collect();

    Layout::Profile {
        initial,
        name: name.unwrap_or_else(|| "Persona Name".to_string()),
        facts,
        panels: vec![
            panel(content, "Bio", "bio"),
            panel(content, "Goals", "goals"),
            panel(content, "Pain Points", "painPoints"),
        ],
    }
}

fn questionnaire(content: &Value) -> Layout {
    let items = field(content, "questions")
        .map(|text| bullets::lines(&text))
        .unwrap_or_default();
    Layout::NumberedList {
        heading: "Research Questions".to_string(),
        items,
    }
}

fn sections(template: &Template, content: &Value) -> Layout {
    let panels = template
        .content
        .sections()
        .iter()
        .map(|s| panel(content, &s.label, &s.id))
        .collect();
    Layout::Sections { panels }
}
