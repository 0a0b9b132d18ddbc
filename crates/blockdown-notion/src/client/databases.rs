//! Database operations for Notion API.

use serde_json::{Map, Value};
use tracing::info;

use super::{Method, NotionClient};
use crate::error::NotionError;
use crate::id::normalize_id;
use crate::pagination::{PageFetch, Paginated};

impl NotionClient {
    /// Retrieve a database object.
    pub fn get_database(&self, database_id: &str) -> Result<Value, NotionError> {
        let id = normalize_id(database_id)?;
        info!("Getting database {}", id);
        self.request(Method::Get, &format!("databases/{id}"), None)
    }

    /// Iterate the pages of a database matching `filter`, ordered by `sorts`.
    ///
    /// Empty filters and sorts are left out of the request.
    pub fn query_database(
        &self,
        database_id: &str,
        filter: Option<&Value>,
        sorts: &[Value],
    ) -> Result<Paginated<impl PageFetch + '_>, NotionError> {
        let id = normalize_id(database_id)?;
        let body = query_body(filter, sorts);

        info!("Querying database {}", id);
        Ok(self.paginate_post(format!("databases/{id}/query"), body))
    }
}

fn query_body(filter: Option<&Value>, sorts: &[Value]) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(filter) = filter.filter(|f| !is_empty(f)) {
        body.insert("filter".to_owned(), filter.clone());
    }
    if !sorts.is_empty() {
        body.insert("sorts".to_owned(), Value::from(sorts.to_vec()));
    }
    body
}

/// Whether a JSON value carries no information (`null`, `{}` or `[]`).
pub(super) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_query_body_omits_empty_filter_and_sorts() {
        assert_eq!(Value::Object(query_body(None, &[])), json!({}));
        assert_eq!(Value::Object(query_body(Some(&json!({})), &[])), json!({}));
    }

    #[test]
    fn test_query_body_with_filter_and_sorts() {
        let filter = json!({"property": "Status", "select": {"equals": "Done"}});
        let sorts = vec![json!({"property": "Due", "direction": "ascending"})];

        assert_eq!(
            Value::Object(query_body(Some(&filter), &sorts)),
            json!({"filter": filter, "sorts": sorts})
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!({"property": "Status"})));
        assert!(!is_empty(&json!("")));
    }
}
