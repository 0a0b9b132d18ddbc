//! Paginated list envelope.

use serde::Deserialize;
use serde_json::Value;

/// One page of a paginated list endpoint.
///
/// Serde ignores unknown fields such as `object` and `type`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    /// Objects on this page.
    #[serde(default)]
    pub results: Vec<Value>,
    /// Whether another page follows.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_list_response() {
        let value = json!({
            "object": "list",
            "results": [{"id": "a"}, {"id": "b"}],
            "has_more": true,
            "next_cursor": "cursor-2"
        });
        let page: ListResponse = serde_json::from_value(value).unwrap();

        assert_eq!(page.results.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("cursor-2"));
    }

    #[test]
    fn test_deserialize_last_page() {
        let value = json!({"results": [], "next_cursor": null});
        let page: ListResponse = serde_json::from_value(value).unwrap();

        assert!(page.results.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
    }
}
