//! Block operations for Notion API.

use blockdown_render::Block;
use serde_json::{Value, json};
use tracing::info;

use super::{Method, NotionClient};
use crate::error::NotionError;
use crate::id::normalize_id;
use crate::pagination::{PageFetch, Paginated};

impl NotionClient {
    /// Iterate the direct children of a block or page.
    pub fn get_block_children(
        &self,
        block_id: &str,
    ) -> Result<Paginated<impl PageFetch + '_>, NotionError> {
        let id = normalize_id(block_id)?;
        info!("Getting children of block {}", id);
        Ok(self.paginate_get(format!("blocks/{id}/children")))
    }

    /// Append blocks after the existing children of a block or page.
    pub fn append_block_children(
        &self,
        block_id: &str,
        children: &[Block],
    ) -> Result<Value, NotionError> {
        let id = normalize_id(block_id)?;
        let payload = json!({ "children": children });

        info!("Appending {} blocks to {}", children.len(), id);
        self.request(
            Method::Patch,
            &format!("blocks/{id}/children"),
            Some(&payload),
        )
    }
}
