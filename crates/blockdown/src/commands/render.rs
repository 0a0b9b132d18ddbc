//! `blockdown render` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::render_file;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let rendered = render_file(&self.markdown_file, output)?;
        output.diagnostics(&rendered.diagnostics);

        let json = if self.compact {
            serde_json::to_string(&rendered.blocks)?
        } else {
            serde_json::to_string_pretty(&rendered.blocks)?
        };
        output.data(&json)?;
        Ok(())
    }
}
