//! `blockdown append` command implementation.

use std::path::PathBuf;

use blockdown_notion::normalize_id;
use clap::Args;

use super::{GlobalArgs, render_file};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the append command.
#[derive(Args)]
pub(crate) struct AppendArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Page or block ID (or page URL) to append to.
    block_id: String,

    /// Render and validate without calling the API.
    #[arg(long)]
    dry_run: bool,
}

impl AppendArgs {
    /// Execute the append command.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let block_id = normalize_id(&self.block_id)?;
        let rendered = render_file(&self.markdown_file, output)?;

        if self.dry_run {
            output.highlight("\n[DRY RUN] No changes made.");
            output.info(&format!(
                "Would append {} block(s) to {block_id}",
                rendered.blocks.len()
            ));
            output.diagnostics(&rendered.diagnostics);
            return Ok(());
        }

        let client = global.client()?;
        client.append_block_children(&block_id, &rendered.blocks)?;

        output.success(&format!(
            "\nAppended {} block(s) to {block_id}",
            rendered.blocks.len()
        ));
        output.diagnostics(&rendered.diagnostics);
        Ok(())
    }
}
