use crate::jina::request::{JinaRequest, build_fact_check_request, build_read_request};
use crate::jina::response::{reduce_fact_check, reduce_read};
use crate::jina::transport::{HttpTransport, Transport, UpstreamResponse};
use crate::types::{AppError, Result};
use crate::utils::config::JinaConfig;
use std::sync::Arc;

/// The `read` and `fact_check` operations.
///
/// Cloning is cheap and every call is independent: the config is read-only
/// and each call makes its own single request through the transport.
#[derive(Clone)]
pub struct JinaService {
    config: Arc<JinaConfig>,
    transport: Arc<dyn Transport>,
}

impl JinaService {
    pub fn new(config: Arc<JinaConfig>) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: Arc<JinaConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &JinaConfig {
        &self.config
    }

    /// Read a URL through the reader endpoint, or search for a query.
    /// Always returns a string; failures come back as their message.
    pub async fn read(&self, query_or_url: &str) -> String {
        self.try_read(query_or_url)
            .await
            .unwrap_or_else(|e| absorb("read", e))
    }

    /// Fact-check a statement against the grounding endpoint.
    /// Always returns a string; failures come back as their message.
    pub async fn fact_check(&self, query: &str) -> String {
        self.try_fact_check(query)
            .await
            .unwrap_or_else(|e| absorb("fact_check", e))
    }

    pub async fn try_read(&self, query_or_url: &str) -> Result<String> {
        let request = build_read_request(&self.config, query_or_url)?;
        tracing::debug!(endpoint = ?request.endpoint, "Dispatching read");

        let response = self.transport.get(&request).await?;
        log_response(&request, &response);
        Ok(reduce_read(response.body))
    }

    pub async fn try_fact_check(&self, query: &str) -> Result<String> {
        let request = build_fact_check_request(&self.config, query)?;
        tracing::debug!(endpoint = ?request.endpoint, "Dispatching fact_check");

        let response = self.transport.get(&request).await?;
        log_response(&request, &response);
        reduce_fact_check(&response.body)
    }
}

fn log_response(request: &JinaRequest, response: &UpstreamResponse) {
    tracing::debug!(
        endpoint = ?request.endpoint,
        status = response.status,
        bytes = response.body.len(),
        "Upstream responded"
    );
}

fn absorb(operation: &str, error: AppError) -> String {
    tracing::warn!(operation, error = %error, "Tool call failed");
    error.to_string()
}
