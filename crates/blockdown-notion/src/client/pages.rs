//! Page operations for Notion API.

use blockdown_render::Block;
use serde_json::{Value, json};
use tracing::info;

use super::{Method, NotionClient};
use crate::error::NotionError;
use crate::id::normalize_id;
use crate::types::Parent;

impl NotionClient {
    /// Retrieve a page object.
    pub fn get_page(&self, page_id: &str) -> Result<Value, NotionError> {
        let id = normalize_id(page_id)?;
        info!("Getting page {}", id);
        self.request(Method::Get, &format!("pages/{id}"), None)
    }

    /// Create a page under `parent` with the given properties and content.
    pub fn create_page(
        &self,
        parent: &Parent,
        properties: &Value,
        children: &[Block],
    ) -> Result<Value, NotionError> {
        let payload = json!({
            "parent": parent,
            "properties": properties,
            "children": children,
        });

        info!("Creating page with {} blocks", children.len());
        let page: Value = self.request(Method::Post, "pages", Some(&payload))?;
        if let Some(id) = page["id"].as_str() {
            info!("Created page {}", id);
        }
        Ok(page)
    }

    /// Update page properties and the archived flag.
    pub fn update_page(
        &self,
        page_id: &str,
        properties: &Value,
        archived: bool,
    ) -> Result<Value, NotionError> {
        let id = normalize_id(page_id)?;
        let payload = json!({
            "properties": properties,
            "archived": archived,
        });

        info!("Updating page {}", id);
        self.request(Method::Patch, &format!("pages/{id}"), Some(&payload))
    }
}
