//! Outbound HTTP for Jina requests.

use crate::jina::request::JinaRequest;
use crate::types::Result;
use async_trait::async_trait;

/// Raw upstream reply. The status is carried for logging only; neither
/// operation validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Performs exactly one GET per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &JinaRequest) -> Result<UpstreamResponse>;
}

/// reqwest-backed transport.
///
/// Each call builds its own client, so connections live no longer than the
/// call that opened them and are released on every exit path when the client
/// drops.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &JinaRequest) -> Result<UpstreamResponse> {
        let client = reqwest::Client::builder().build()?;

        let response = client
            .get(&request.url)
            .headers(request.headers.clone())
            .send()
            .await?;

        Ok(UpstreamResponse {
            status: response.status().as_u16(),
            body: response.text().await?,
        })
    }
}
