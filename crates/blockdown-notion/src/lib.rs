//! Notion API client for blockdown.
//!
//! A blocking client for the public Notion REST API. Pages and blocks can be
//! created from Markdown, which is rendered with `blockdown-render` before
//! upload.
//!
//! ```no_run
//! use blockdown_notion::{ClientSettings, NotionClient};
//!
//! let client = NotionClient::new("secret_token", ClientSettings::default())?;
//! let upload = client.append_block_markdown(
//!     "0123456789abcdef0123456789abcdef",
//!     "# Notes\n\n- first\n- second",
//! )?;
//! for diagnostic in &upload.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), blockdown_notion::NotionError>(())
//! ```

mod client;
mod error;
mod id;
mod pagination;
pub mod types;

pub use client::{ClientSettings, NotionClient};
pub use error::NotionError;
pub use id::normalize_id;
pub use pagination::{PageFetch, Paginated};
pub use types::{ListResponse, MarkdownUpload, Parent, title_property};
