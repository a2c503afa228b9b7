// HTTP client for the shopping-list API
//
// Wraps `reqwest::Client` with base-URL path construction and uniform
// status/JSON handling. Every endpoint returns `Option<T>`: the service
// may answer `null`, which callers treat as "no result" rather than a
// failure.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{ItemRecord, ListRecord, RecordId};
use crate::transport::TransportConfig;

const BODY_PREVIEW_LEN: usize = 200;

/// Raw HTTP client for the shopping-list JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the service root; endpoint paths are appended to it,
    /// so a base with a path prefix (as on the public mock server) works.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET /lists`
    pub async fn list_lists(&self) -> Result<Option<Vec<ListRecord>>, Error> {
        let url = self.endpoint(&["lists"])?;
        self.get(url).await
    }

    /// `GET /lists/{listId}`
    pub async fn get_list(&self, list_id: &RecordId) -> Result<Option<ListRecord>, Error> {
        let url = self.endpoint(&["lists", &list_id.to_string()])?;
        self.get(url).await
    }

    /// `GET /lists/{listId}/items`
    pub async fn list_items(&self, list_id: &RecordId) -> Result<Option<Vec<ItemRecord>>, Error> {
        let url = self.endpoint(&["lists", &list_id.to_string(), "items"])?;
        self.get(url).await
    }

    /// `POST /items`
    ///
    /// Returns the response body as raw JSON. The echo is not guaranteed
    /// to match the submitted record, so it is left untyped.
    pub async fn create_item(&self, item: &ItemRecord) -> Result<Option<serde_json::Value>, Error> {
        let url = self.endpoint(&["items"])?;
        self.post(url, item).await
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut full = self.base_url.clone();
        {
            let mut path = full.path_segments_mut().map_err(|()| {
                Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(full)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::parse_response(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<T>, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_response(resp).await
    }

    /// Check the status, then decode the body as `Option<T>`.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Option<T>, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(len = body.len(), "response body received");

        serde_json::from_str::<Option<T>>(&body).map_err(|e| {
            let message = format!("{e} (body preview: {:?})", preview(&body));
            Error::Deserialization { message, body }
        })
    }
}

/// First `BODY_PREVIEW_LEN` bytes of `body`, cut on a char boundary.
fn preview(body: &str) -> &str {
    if body.len() <= BODY_PREVIEW_LEN {
        return body;
    }
    let mut end = BODY_PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
