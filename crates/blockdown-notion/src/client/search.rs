//! Search for Notion API.

use serde_json::{Map, Value};
use tracing::info;

use super::NotionClient;
use super::databases::is_empty;
use crate::pagination::{PageFetch, Paginated};

impl NotionClient {
    /// Iterate pages and databases shared with the integration whose title
    /// matches `query`.
    ///
    /// `sort` and `filter` are only sent when non-empty.
    pub fn search(
        &self,
        query: &str,
        sort: Option<&Value>,
        filter: Option<&Value>,
    ) -> Paginated<impl PageFetch + '_> {
        let body = search_body(query, sort, filter);
        info!("Searching for {:?}", query);
        self.paginate_post("search".to_owned(), body)
    }
}

fn search_body(query: &str, sort: Option<&Value>, filter: Option<&Value>) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("query".to_owned(), Value::from(query));
    if let Some(sort) = sort.filter(|s| !is_empty(s)) {
        body.insert("sort".to_owned(), sort.clone());
    }
    if let Some(filter) = filter.filter(|f| !is_empty(f)) {
        body.insert("filter".to_owned(), filter.clone());
    }
    body
}
