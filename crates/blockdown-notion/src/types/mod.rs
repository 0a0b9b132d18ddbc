//! Notion API types.
//!
//! Only the envelope shapes the client relies on are typed. Page, database and
//! block payloads pass through as [`serde_json::Value`].

mod list;
mod page;

pub use list::ListResponse;
pub use page::{MarkdownUpload, Parent, title_property};
