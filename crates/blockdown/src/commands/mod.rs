//! CLI command implementations.

mod append;
mod create;
mod render;

use std::path::{Path, PathBuf};

use blockdown_config::{CliSettings, Config};
use blockdown_notion::NotionClient;
use blockdown_render::{Block, RenderOutput, markdown_to_blocks};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use append::AppendArgs;
pub(crate) use create::CreateArgs;
pub(crate) use render::RenderArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover blockdown.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Notion integration token (overrides config).
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl GlobalArgs {
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            token: self.token.clone(),
            ..Default::default()
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Build an API client from config, failing without a token.
    fn client(&self) -> Result<NotionClient, CliError> {
        let config = self.load_config()?;
        let notion = config.require_token()?;
        Ok(NotionClient::from_config(notion)?)
    }
}

/// Read and render a Markdown file.
fn render_file(path: &Path, output: &Output) -> Result<RenderOutput, CliError> {
    let markdown = std::fs::read_to_string(path)?;
    output.info(&format!("Converting {}...", path.display()));
    Ok(markdown_to_blocks(&markdown)?)
}

/// Page title: text of the first heading, else the file stem.
fn resolve_title(rendered: &RenderOutput, path: &Path) -> String {
    rendered
        .blocks
        .iter()
        .find(|block| block.kind().is_heading())
        .map(Block::plain_text)
        .filter(|title| !title.trim().is_empty())
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_title_from_first_heading() {
        let rendered = markdown_to_blocks("intro\n\n## Release notes\n\n# Later").unwrap();
        assert_eq!(
            resolve_title(&rendered, Path::new("docs/notes.md")),
            "Release notes"
        );
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let rendered = markdown_to_blocks("just text").unwrap();
        assert_eq!(
            resolve_title(&rendered, Path::new("docs/weekly-sync.md")),
            "weekly-sync"
        );
    }

    #[test]
    fn test_render_file_reads_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        std::fs::write(&path, "# Title\n\n- item").unwrap();

        let rendered = render_file(&path, &Output::new()).unwrap();
        assert_eq!(rendered.blocks.len(), 2);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_diagnostics_not_logged_at_default_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        std::fs::write(&path, "> quote\n\n---\n").unwrap();

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .with_writer(logs.clone())
            .finish();
        let rendered = tracing::subscriber::with_default(subscriber, || {
            render_file(&path, &Output::new()).unwrap()
        });

        assert_eq!(rendered.diagnostics.len(), 2);
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_render_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_file(&dir.path().join("missing.md"), &Output::new());
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
