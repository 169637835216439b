//! Recommendation service HTTP client
//!
//! Transport only: opens the streaming POST and hands back the raw byte-chunk
//! stream. No retry, no authentication, one stream at a time.

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use nexttrack_common::{Error, RecommendRequest, Result};
use std::time::Duration;

const RECOMMEND_STREAM_PATH: &str = "/mb/recommend/stream";
const USER_AGENT: &str = concat!("nexttrack/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Streaming recommendation client
pub struct RecommendClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RecommendClient {
    /// Build a client for the given base URL (no trailing slash expected)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // No overall request timeout: the body is an open-ended event stream.
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// POST the request and return the response body as a chunk stream.
    ///
    /// Fails with `Error::Network` when the endpoint is unreachable and
    /// `Error::Api` when the server answers with a non-success status before
    /// any streaming begins. Mid-stream read failures surface as
    /// `Error::Network` items inside the returned stream.
    pub async fn open_stream(
        &self,
        request: &RecommendRequest,
    ) -> Result<impl Stream<Item = Result<Bytes>>> {
        let url = format!("{}{}", self.base_url, RECOMMEND_STREAM_PATH);

        tracing::debug!(url = %url, seeds = request.tracks.len(), "Opening recommendation stream");

        let response = self
            .http_client
            .post(&url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(status.as_u16(), error_text));
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Error::Network(e.to_string()))))
    }
}
