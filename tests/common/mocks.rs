//! Mock implementations for testing.
//!
//! This module provides a recording transport that can be used across
//! different test files without duplication.

use async_trait::async_trait;
use jina_mcp::jina::{JinaRequest, Transport, UpstreamResponse};
use jina_mcp::types::{AppError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// A request as the transport saw it, with headers flattened for asserts.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock transport with a canned reply.
///
/// Every call is recorded, so tests can assert how many requests went out
/// and what they looked like.
///
/// # Examples
///
/// ```ignore
/// let transport = MockTransport::responding("body");
/// let service = JinaService::with_transport(config, transport.clone());
/// service.read("query").await;
/// assert_eq!(transport.calls().len(), 1);
/// ```
#[derive(Default)]
pub struct MockTransport {
    body: String,
    should_fail: bool,
    calls: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a transport that answers every request with `body`.
    pub fn responding(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            ..Default::default()
        })
    }

    /// Create a transport that answers with a JSON document.
    pub fn responding_json(value: serde_json::Value) -> Arc<Self> {
        Self::responding(&value.to_string())
    }

    /// Create a transport whose every request fails at the network level.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            should_fail: true,
            ..Default::default()
        })
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: &JinaRequest) -> Result<UpstreamResponse> {
        self.calls.lock().push(RecordedRequest {
            url: request.url.clone(),
            headers: request
                .headers
                .iter()
                .map(|(k, v)| {
                    (
                        k.as_str().to_string(),
                        v.to_str().unwrap_or_default().to_string(),
                    )
                })
                .collect(),
        });

        if self.should_fail {
            return Err(AppError::Internal(
                "Mock transport failure: connection refused".to_string(),
            ));
        }

        Ok(UpstreamResponse {
            status: 200,
            body: self.body.clone(),
        })
    }
}
