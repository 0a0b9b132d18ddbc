//! Notion REST API client.
//!
//! Provides a sync HTTP client for the public Notion API with bearer token
//! authentication.

mod blocks;
mod databases;
mod markdown;
mod pages;
mod search;
mod users;

use std::time::Duration;

use blockdown_config::NotionConfig;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use ureq::{Agent, RequestBuilder};

use crate::error::NotionError;
use crate::pagination::{PageFetch, Paginated, paginated_body, paginated_path};
use crate::types::ListResponse;

/// Connection settings for [`NotionClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API base URL.
    pub api_url: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Page size for paginated endpoints.
    pub page_size: u32,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from(&NotionConfig::default())
    }
}

impl From<&NotionConfig> for ClientSettings {
    fn from(config: &NotionConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            version: config.version.clone(),
            page_size: config.page_size,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
    version: String,
    page_size: u32,
}

impl NotionClient {
    /// Create a client authenticating with an internal integration token.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::MissingToken`] if `token` is blank.
    pub fn new(token: &str, settings: ClientSettings) -> Result<Self, NotionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(NotionError::MissingToken);
        }

        let agent = Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: settings.api_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
            version: settings.version,
            page_size: settings.page_size,
        })
    }

    /// Create client from config values.
    pub fn from_config(config: &NotionConfig) -> Result<Self, NotionError> {
        Self::new(&config.token, ClientSettings::from(config))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_headers<B>(&self, builder: RequestBuilder<B>) -> RequestBuilder<B> {
        builder
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Notion-Version", &self.version)
            .header("Accept", "application/json")
    }

    /// Send a request and decode the JSON response.
    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, NotionError> {
        let url = self.url(path);
        debug!("{} {}", method.as_str(), url);

        let payload = body.map(serde_json::to_vec).transpose()?;

        let response = match method {
            Method::Get => self.with_headers(self.agent.get(&url)).call()?,
            Method::Post => self.send(self.agent.post(&url), payload.as_deref())?,
            Method::Patch => self.send(self.agent.patch(&url), payload.as_deref())?,
        };

        read_json(response)
    }

    fn send(
        &self,
        builder: RequestBuilder<ureq::typestate::WithBody>,
        payload: Option<&[u8]>,
    ) -> Result<ureq::http::Response<ureq::Body>, NotionError> {
        let builder = self.with_headers(builder);
        let response = match payload {
            Some(bytes) => builder
                .header("Content-Type", "application/json")
                .send(bytes)?,
            None => builder.send_empty()?,
        };
        Ok(response)
    }

    /// Iterate a GET list endpoint.
    fn paginate_get(&self, path: String) -> Paginated<impl PageFetch + '_> {
        let page_size = self.page_size;
        Paginated::new(move |cursor: Option<&str>| {
            self.request::<ListResponse>(
                Method::Get,
                &paginated_path(&path, page_size, cursor),
                None,
            )
        })
    }

    /// Iterate a POST list endpoint.
    fn paginate_post(
        &self,
        path: String,
        body: Map<String, Value>,
    ) -> Paginated<impl PageFetch + '_> {
        let page_size = self.page_size;
        Paginated::new(move |cursor: Option<&str>| {
            let body = paginated_body(&body, page_size, cursor);
            self.request::<ListResponse>(Method::Post, &path, Some(&body))
        })
    }
}

/// Check the response status and decode the body.
fn read_json<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, NotionError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(NotionError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_json()?)
}
