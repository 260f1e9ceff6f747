//! Upstream gist provider client
//!
//! One HTTP call per operation against the provider's REST API, with the
//! fixed header set attached to every request. Failures surface the
//! upstream status immediately; nothing is retried, and no timeout is
//! applied beyond the transport default.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::{CommitEntry, Gist};

/// Media type the provider expects on every call.
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";
/// Provider API version header.
const API_VERSION_HEADER: &str = "x-github-api-version";
/// Pinned provider API version.
const API_VERSION: &str = "2022-11-28";
/// User agent the provider requires on every call.
const USER_AGENT: &str = concat!("gistrelay/", env!("CARGO_PKG_VERSION"));

/// Errors from the upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider does not know the requested gist or revision (404).
    #[error("upstream resource not found")]
    NotFound,

    /// Any other non-2xx provider response.
    #[error("upstream returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Network failure or unparseable response body.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client could not be constructed from the given settings.
    #[error("upstream client configuration error: {0}")]
    Configuration(String),
}

/// HTTP client for the upstream gist provider.
///
/// Holds one `reqwest::Client` carrying the fixed header set (accept media
/// type, bearer token, API version); built once at startup and shared
/// read-only across requests.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client rooted at `base_url`, authenticating every call
    /// with `token`.
    pub fn new(base_url: &str, token: &str) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| UpstreamError::Configuration(format!("invalid token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a gist by id.
    pub async fn gist(&self, id: &str) -> Result<Gist, UpstreamError> {
        debug!(gist_id = %id, "fetching gist");
        let url = format!("{}/gists/{id}", self.base_url);
        let response = self.send(self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Create a gist with a single file under `filename`.
    pub async fn create(
        &self,
        description: Option<&str>,
        public: bool,
        filename: &str,
        content: &str,
    ) -> Result<Gist, UpstreamError> {
        debug!(%filename, "creating gist");
        let mut body = Map::new();
        if let Some(description) = description {
            body.insert("description".into(), Value::String(description.into()));
        }
        body.insert("public".into(), Value::Bool(public));
        body.insert("files".into(), single_file(filename, content));

        let url = format!("{}/gists", self.base_url);
        let response = self.send(self.http.post(&url).json(&body)).await?;
        Ok(response.json().await?)
    }

    /// Upsert a single file's content in an existing gist. The provider's
    /// response body is not needed and is discarded.
    pub async fn update(
        &self,
        id: &str,
        filename: &str,
        content: &str,
    ) -> Result<(), UpstreamError> {
        debug!(gist_id = %id, %filename, "updating gist");
        let body = json!({ "files": single_file(filename, content) });
        let url = format!("{}/gists/{id}", self.base_url);
        self.send(self.http.patch(&url).json(&body)).await?;
        Ok(())
    }

    /// Delete a gist by id.
    pub async fn delete(&self, id: &str) -> Result<(), UpstreamError> {
        debug!(gist_id = %id, "deleting gist");
        let url = format!("{}/gists/{id}", self.base_url);
        self.send(self.http.delete(&url)).await?;
        Ok(())
    }

    /// Fetch one page of a gist's commit history. Pagination values are
    /// forwarded verbatim when present.
    pub async fn commits(
        &self,
        id: &str,
        page: Option<&str>,
        per_page: Option<&str>,
    ) -> Result<Vec<CommitEntry>, UpstreamError> {
        debug!(gist_id = %id, "fetching commit history");
        let url = format!("{}/gists/{id}/commits", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        if let Some(per_page) = per_page {
            request = request.query(&[("per_page", per_page)]);
        }
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Fetch the full gist snapshot at revision `sha`.
    pub async fn revision(&self, id: &str, sha: &str) -> Result<Gist, UpstreamError> {
        debug!(gist_id = %id, %sha, "fetching revision");
        let url = format!("{}/gists/{id}/{sha}", self.base_url);
        let response = self.send(self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Issue the request and classify the response status.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, UpstreamError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND {
            Err(UpstreamError::NotFound)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Build the `{<filename>: {"content": <content>}}` file map the provider
/// expects on create and update.
fn single_file(filename: &str, content: &str) -> Value {
    let mut files = Map::new();
    files.insert(filename.to_string(), json!({ "content": content }));
    Value::Object(files)
}
