//! `blockdown create` command implementation.

use std::path::PathBuf;

use blockdown_notion::{Parent, title_property};
use clap::Args;
use serde_json::Value;

use super::{GlobalArgs, render_file, resolve_title};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Parent page ID (or page URL).
    #[arg(long)]
    parent_page: String,

    /// Page title (default: first heading, then file name).
    #[arg(short, long)]
    title: Option<String>,

    /// Render and validate without calling the API.
    #[arg(long)]
    dry_run: bool,
}

impl CreateArgs {
    /// Execute the create command.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let parent = Parent::page(&self.parent_page)?;
        let rendered = render_file(&self.markdown_file, output)?;
        let title = self
            .title
            .unwrap_or_else(|| resolve_title(&rendered, &self.markdown_file));

        if self.dry_run {
            output.highlight("\n[DRY RUN] No changes made.");
            output.info(&format!("Title: {title}"));
            output.info(&format!("Blocks: {}", rendered.blocks.len()));
            output.diagnostics(&rendered.diagnostics);
            return Ok(());
        }

        let client = global.client()?;
        let page = client.create_page(&parent, &title_property(&title), &rendered.blocks)?;

        print_created_page(output, &page, &title);
        output.diagnostics(&rendered.diagnostics);
        Ok(())
    }
}

fn print_created_page(output: &Output, page: &Value, title: &str) {
    output.success("\nPage created successfully!");
    if let Some(id) = page["id"].as_str() {
        output.info(&format!("ID: {id}"));
    }
    output.info(&format!("Title: {title}"));
    if let Some(url) = page["url"].as_str() {
        output.info(&format!("URL: {url}"));
    }
}
