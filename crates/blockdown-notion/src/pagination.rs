//! Cursor pagination for list endpoints.
//!
//! GET endpoints receive `page_size` and `start_cursor` as query parameters,
//! POST endpoints receive them as JSON body fields.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value};

use crate::error::NotionError;
use crate::types::ListResponse;

/// Unreserved URL characters: A-Z a-z 0-9 - . _ ~
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Append pagination query parameters to a relative path.
pub(crate) fn paginated_path(path: &str, page_size: u32, cursor: Option<&str>) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    let mut url = format!("{path}{separator}page_size={page_size}");
    if let Some(cursor) = cursor {
        url.push_str("&start_cursor=");
        url.extend(utf8_percent_encode(cursor, QUERY_ENCODE_SET));
    }
    url
}

/// Copy of a request body with pagination fields set.
pub(crate) fn paginated_body(
    body: &Map<String, Value>,
    page_size: u32,
    cursor: Option<&str>,
) -> Value {
    let mut body = body.clone();
    body.insert("page_size".to_owned(), Value::from(page_size));
    if let Some(cursor) = cursor {
        body.insert("start_cursor".to_owned(), Value::from(cursor));
    }
    Value::Object(body)
}

/// Page loader used by [`Paginated`].
pub trait PageFetch: FnMut(Option<&str>) -> Result<ListResponse, NotionError> {}

impl<F> PageFetch for F where F: FnMut(Option<&str>) -> Result<ListResponse, NotionError> {}

/// Iterator over every result of a paginated endpoint.
///
/// `fetch` is called with the cursor of the next page (`None` for the first)
/// and only while the previous page reported `has_more`. Iteration stops after
/// the first error.
pub struct Paginated<F> {
    fetch: F,
    cursor: Option<String>,
    has_more: bool,
    buffer: std::vec::IntoIter<Value>,
}

impl<F> Paginated<F>
where
    F: FnMut(Option<&str>) -> Result<ListResponse, NotionError>,
{
    pub(crate) fn new(fetch: F) -> Self {
        Self {
            fetch,
            cursor: None,
            has_more: true,
            buffer: Vec::new().into_iter(),
        }
    }
}

impl<F> Iterator for Paginated<F>
where
    F: FnMut(Option<&str>) -> Result<ListResponse, NotionError>,
{
    type Item = Result<Value, NotionError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(result) = self.buffer.next() {
                return Some(Ok(result));
            }
            if !self.has_more {
                return None;
            }

            match (self.fetch)(self.cursor.as_deref()) {
                Ok(page) => {
                    // A page without a cursor cannot be followed.
                    self.has_more = page.has_more && page.next_cursor.is_some();
                    self.cursor = page.next_cursor;
                    self.buffer = page.results.into_iter();
                }
                Err(e) => {
                    self.has_more = false;
                    return Some(Err(e));
                }
            }
        }
    }
}
