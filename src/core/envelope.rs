//! Uniform tool-call envelope: a content sequence plus an `isError` flag.
//!
//! Every dispatch outcome — success, validation failure, upstream failure —
//! resolves to this one shape. Callers inspect the flag, not the text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResponse {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// The single text item, when present. Handy in tests and logging.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|ContentItem::Text { text }| text.as_str())
    }
}
