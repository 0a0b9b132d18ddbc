//! Markdown upload operations.

use blockdown_render::markdown_to_blocks;
use serde_json::Value;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{MarkdownUpload, Parent};

impl NotionClient {
    /// Like [`NotionClient::create_page`], with the content given as Markdown.
    ///
    /// Nothing is sent when the Markdown cannot be rendered.
    pub fn create_page_markdown(
        &self,
        parent: &Parent,
        properties: &Value,
        markdown: &str,
    ) -> Result<MarkdownUpload, NotionError> {
        let output = markdown_to_blocks(markdown)?;
        let response = self.create_page(parent, properties, &output.blocks)?;
        Ok(MarkdownUpload {
            response,
            diagnostics: output.diagnostics,
        })
    }

    /// Like [`NotionClient::append_block_children`], with the blocks given as
    /// Markdown.
    pub fn append_block_markdown(
        &self,
        block_id: &str,
        markdown: &str,
    ) -> Result<MarkdownUpload, NotionError> {
        let output = markdown_to_blocks(markdown)?;
        let response = self.append_block_children(block_id, &output.blocks)?;
        Ok(MarkdownUpload {
            response,
            diagnostics: output.diagnostics,
        })
    }
}
