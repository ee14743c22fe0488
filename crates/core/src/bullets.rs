//! Auto-bullet list codec for free-text fields.
//!
//! A textarea value is either plain text or, when its first line starts with
//! a list marker, a whole-block list. Lists are stored as text: two spaces
//! per indent level followed by a `• ` bullet or an `N. ` number. Numbering
//! is hierarchical and restarts at 1 under each shallower item.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker prefixed to every bulleted item.
pub const BULLET_MARKER: &str = "• ";

/// Deepest supported indent level (0-based).
pub const MAX_INDENT: usize = 5;

/// Spaces per indent level.
const INDENT_WIDTH: usize = 2;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*•\s").expect("valid regex"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s").expect("valid regex"));

/// How a text block is structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    Text,
    Bullet,
    Number,
}

/// One line of a structured list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    pub indent: usize,
}

impl ListItem {
    pub fn new(text: impl Into<String>, indent: usize) -> Self {
        Self {
            text: text.into(),
            indent: indent.min(MAX_INDENT),
        }
    }
}

/// Decide the block's mode from its first line only.
pub fn detect_mode(text: &str) -> ListMode {
    let first = text.lines().next().unwrap_or("");
    if first.trim_start().starts_with(BULLET_MARKER) {
        ListMode::Bullet
    } else if NUMBER_RE.is_match(first) {
        ListMode::Number
    } else {
        ListMode::Text
    }
}

/// Split `text` into list items, stripping the marker appropriate to `mode`.
///
/// Always returns at least one item.
pub fn parse(text: &str, mode: ListMode) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = text
        .split('\n')
        .map(|line| {
            let leading = line.len() - line.trim_start().len();
            let indent = line[..leading].chars().count() / INDENT_WIDTH;
            let marker = match mode {
                ListMode::Bullet => BULLET_RE.find(line),
                ListMode::Number => NUMBER_RE.find(line),
                ListMode::Text => None,
            };
            let body = match marker {
                Some(m) => &line[m.end()..],
                None => line.trim_start(),
            };
            ListItem::new(body, indent)
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::new("", 0));
    }
    items
}

/// Render list items back to text in the given mode.
pub fn serialize(items: &[ListItem], mode: ListMode) -> String {
    let mut counters = [0usize; MAX_INDENT + 1];

    items
        .iter()
        .map(|item| {
            let indent = item.indent.min(MAX_INDENT);
            let pad = " ".repeat(indent * INDENT_WIDTH);
            match mode {
                ListMode::Text => format!("{pad}{}", item.text),
                ListMode::Bullet => format!("{pad}{BULLET_MARKER}{}", item.text),
                ListMode::Number => {
                    counters[indent] += 1;
                    for deeper in counters.iter_mut().skip(indent + 1) {
                        *deeper = 0;
                    }
                    format!("{pad}{}. {}", counters[indent], item.text)
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Non-blank lines of `text` with any list marker removed.
pub fn lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let stripped = BULLET_RE
                .find(line)
                .or_else(|| NUMBER_RE.find(line))
                .map_or(line, |m| &line[m.end()..]);
            stripped.trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
