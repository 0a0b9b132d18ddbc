//! User operations for Notion API.

use serde_json::Value;
use tracing::info;

use super::{Method, NotionClient};
use crate::error::NotionError;
use crate::id::normalize_id;
use crate::pagination::{PageFetch, Paginated};

impl NotionClient {
    /// Retrieve a user object.
    pub fn get_user(&self, user_id: &str) -> Result<Value, NotionError> {
        let id = normalize_id(user_id)?;
        info!("Getting user {}", id);
        self.request(Method::Get, &format!("users/{id}"), None)
    }

    /// Iterate every user in the workspace.
    pub fn list_all_users(&self) -> Paginated<impl PageFetch + '_> {
        info!("Listing users");
        self.paginate_get("users".to_owned())
    }
}
