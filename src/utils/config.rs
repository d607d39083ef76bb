use crate::types::{AppError, Result};
use reqwest::Url;
use std::env;

/// Environment variable holding the Jina AI bearer token.
pub const API_KEY_VAR: &str = "JINAAI_API_KEY";

pub const DEFAULT_READER_URL: &str = "https://r.jina.ai/";
pub const DEFAULT_SEARCH_URL: &str = "https://s.jina.ai/";
pub const DEFAULT_GROUNDING_URL: &str = "https://g.jina.ai/";

/// Process-wide settings for the Jina upstreams.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards. A missing credential is a valid state: every operation
/// short-circuits on it instead of failing startup.
#[derive(Debug, Clone)]
pub struct JinaConfig {
    pub api_key: Option<String>,
    pub reader_url: String,
    pub search_url: String,
    pub grounding_url: String,
    /// Seconds, sent as `X-Timeout` on `read` requests.
    pub timeout_hint: u32,
    pub locale: String,
    pub retain_images: String,
}

impl Default for JinaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            reader_url: DEFAULT_READER_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            grounding_url: DEFAULT_GROUNDING_URL.to_string(),
            timeout_hint: 20,
            locale: "en-US".to_string(),
            retain_images: "none".to_string(),
        }
    }
}

impl JinaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source so tests need not touch the
    /// real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = |var: &str, default: String| -> Result<String> {
            match lookup(var).filter(|v| !v.trim().is_empty()) {
                Some(value) => normalize_base_url(var, value.trim()),
                None => Ok(default),
            }
        };

        Ok(Self {
            api_key: lookup(API_KEY_VAR).filter(|k| !k.is_empty()),
            reader_url: base_url("JINAAI_READER_URL", defaults.reader_url)?,
            search_url: base_url("JINAAI_SEARCH_URL", defaults.search_url)?,
            grounding_url: base_url("JINAAI_GROUNDING_URL", defaults.grounding_url)?,
            ..defaults
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    /// Point all three upstreams at one base, e.g. a local mock server.
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        let base = normalize_base_url("base_url", base)?;
        self.reader_url = base.clone();
        self.search_url = base.clone();
        self.grounding_url = base;
        Ok(self)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }
}

/// Validate an upstream base and make sure it ends in `/`, since request
/// URLs are formed by appending the caller's input verbatim.
fn normalize_base_url(var: &str, value: &str) -> Result<String> {
    let url = Url::parse(value)
        .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", var, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "{} must use http or https, got '{}'",
            var,
            url.scheme()
        )));
    }

    let mut base = value.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}
