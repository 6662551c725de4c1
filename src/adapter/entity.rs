//! Per-entity display rules: which role a page shows for an item, and how
//! its value is normalized before comparing against rendered text.

use crate::config::DisplayConfig;
use crate::registry::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Remove every newline
    StripNewlines,
    /// Keep the first line, cut to at most this many characters
    FirstLine(usize),
}

impl Normalize {
    pub fn apply(self, value: &str) -> String {
        match self {
            Normalize::StripNewlines => value.replace('\n', ""),
            Normalize::FirstLine(max_chars) => value
                .split('\n')
                .next()
                .unwrap_or_default()
                .chars()
                .take(max_chars)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRule {
    pub role: &'static str,
    pub normalize: Normalize,
}

impl DisplayRule {
    pub fn for_entity(entity: EntityKind, display: &DisplayConfig) -> Self {
        match entity {
            EntityKind::Post => Self {
                role: "title",
                normalize: Normalize::StripNewlines,
            },
            EntityKind::Comment => Self {
                role: "text",
                normalize: Normalize::FirstLine(display.comment_text_len),
            },
            EntityKind::User => Self {
                role: "last_name",
                normalize: Normalize::StripNewlines,
            },
        }
    }
}
