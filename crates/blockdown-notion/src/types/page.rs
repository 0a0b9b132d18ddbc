//! Page creation types.

use blockdown_render::{Diagnostic, RichText};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::NotionError;
use crate::id::normalize_id;

/// Parent of a new page.
///
/// Serializes as `{"page_id": ...}` or `{"database_id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Parent {
    /// Nest the page under another page.
    #[serde(rename = "page_id")]
    Page(String),
    /// Add the page as a database row.
    #[serde(rename = "database_id")]
    Database(String),
}

impl Parent {
    /// Page parent with a normalized ID.
    pub fn page(id: &str) -> Result<Self, NotionError> {
        Ok(Self::Page(normalize_id(id)?))
    }

    /// Database parent with a normalized ID.
    pub fn database(id: &str) -> Result<Self, NotionError> {
        Ok(Self::Database(normalize_id(id)?))
    }
}

/// Properties object holding only a page title.
pub fn title_property(title: &str) -> Value {
    json!({ "title": [RichText::plain(title)] })
}

/// Result of uploading rendered Markdown.
#[derive(Debug, Clone)]
pub struct MarkdownUpload {
    /// Parsed API response.
    pub response: Value,
    /// Constructs degraded while rendering the Markdown.
    pub diagnostics: Vec<Diagnostic>,
}
