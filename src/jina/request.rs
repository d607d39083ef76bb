//! Request descriptors for the reader, search and grounding endpoints.

use crate::jina::url::is_valid_url;
use crate::types::Result;
use crate::utils::config::JinaConfig;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

pub const X_RETAIN_IMAGES: HeaderName = HeaderName::from_static("x-retain-images");
pub const X_TIMEOUT: HeaderName = HeaderName::from_static("x-timeout");
pub const X_LOCALE: HeaderName = HeaderName::from_static("x-locale");
pub const X_WITH_LINKS_SUMMARY: HeaderName = HeaderName::from_static("x-with-links-summary");

/// Which upstream a request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Reader,
    Search,
    Grounding,
}

impl Endpoint {
    fn base_url(self, config: &JinaConfig) -> &str {
        match self {
            Endpoint::Reader => &config.reader_url,
            Endpoint::Search => &config.search_url,
            Endpoint::Grounding => &config.grounding_url,
        }
    }
}

/// One outbound GET, built fresh per call and dropped with it.
#[derive(Debug, Clone)]
pub struct JinaRequest {
    pub endpoint: Endpoint,
    pub url: String,
    pub headers: HeaderMap,
}

impl JinaRequest {
    fn new(config: &JinaConfig, endpoint: Endpoint, input: &str, headers: HeaderMap) -> Self {
        Self {
            endpoint,
            url: format!("{}{}", endpoint.base_url(config), input),
            headers,
        }
    }
}

/// Build the `read` request: reader endpoint for URLs, search otherwise.
pub fn build_read_request(config: &JinaConfig, query_or_url: &str) -> Result<JinaRequest> {
    let mut headers = auth_headers(config)?;
    headers.insert(X_RETAIN_IMAGES, HeaderValue::from_str(&config.retain_images)?);
    headers.insert(X_TIMEOUT, HeaderValue::from(config.timeout_hint));
    headers.insert(X_LOCALE, HeaderValue::from_str(&config.locale)?);

    let endpoint = if is_valid_url(query_or_url) {
        headers.insert(X_WITH_LINKS_SUMMARY, HeaderValue::from_static("true"));
        Endpoint::Reader
    } else {
        Endpoint::Search
    };

    Ok(JinaRequest::new(config, endpoint, query_or_url, headers))
}

/// Build the `fact_check` request against the grounding endpoint.
pub fn build_fact_check_request(config: &JinaConfig, query: &str) -> Result<JinaRequest> {
    let mut headers = auth_headers(config)?;
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(JinaRequest::new(config, Endpoint::Grounding, query, headers))
}

fn auth_headers(config: &JinaConfig) -> Result<HeaderMap> {
    let api_key = config.require_api_key()?;

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    fn config() -> JinaConfig {
        JinaConfig::default().with_api_key("test-key")
    }

    fn header<'a>(request: &'a JinaRequest, name: &str) -> Option<&'a str> {
        request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_read_url_targets_reader() {
        let request = build_read_request(&config(), "https://example.com").unwrap();

        assert_eq!(request.endpoint, Endpoint::Reader);
        assert_eq!(request.url, "https://r.jina.ai/https://example.com");
        assert_eq!(header(&request, "Authorization"), Some("Bearer test-key"));
        assert_eq!(header(&request, "X-Retain-Images"), Some("none"));
        assert_eq!(header(&request, "X-Timeout"), Some("20"));
        assert_eq!(header(&request, "X-Locale"), Some("en-US"));
        assert_eq!(header(&request, "X-With-Links-Summary"), Some("true"));
    }

    #[test]
    fn test_read_query_targets_search() {
        let request = build_read_request(&config(), "openai gpt-5 release date").unwrap();

        assert_eq!(request.endpoint, Endpoint::Search);
        assert_eq!(request.url, "https://s.jina.ai/openai gpt-5 release date");
        assert_eq!(header(&request, "x-timeout"), Some("20"));
        assert!(request.headers.get(X_WITH_LINKS_SUMMARY).is_none());
    }

    #[test]
    fn test_fact_check_headers() {
        let request = build_fact_check_request(&config(), "the sky is green").unwrap();

        assert_eq!(request.endpoint, Endpoint::Grounding);
        assert_eq!(request.url, "https://g.jina.ai/the sky is green");
        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(header(&request, "authorization"), Some("Bearer test-key"));
        assert_eq!(request.headers.len(), 2);
    }

    #[test]
    fn test_missing_key_short_circuits() {
        let config = JinaConfig::default();
        assert!(matches!(
            build_read_request(&config, "https://example.com"),
            Err(AppError::MissingApiKey)
        ));
        assert!(matches!(
            build_fact_check_request(&config, "claim"),
            Err(AppError::MissingApiKey)
        ));
    }

    #[test]
    fn test_authorization_is_sensitive() {
        let request = build_fact_check_request(&config(), "claim").unwrap();
        assert!(request.headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_unencodable_key_is_an_error() {
        let config = JinaConfig::default().with_api_key("bad\nkey");
        assert!(matches!(
            build_read_request(&config, "query"),
            Err(AppError::InvalidHeader(_))
        ));
    }
}
