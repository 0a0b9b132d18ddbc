//! CLI error types.

use blockdown_config::ConfigError;
use blockdown_notion::NotionError;
use blockdown_render::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Notion(#[from] NotionError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
