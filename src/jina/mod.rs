//! Jina AI proxy operations
//!
//! Each tool call is a straight pipeline:
//!
//! 1. [`url`] - decide whether the input is an http(s) URL or a query
//! 2. [`request`] - pick the reader, search or grounding endpoint and its headers
//! 3. [`transport`] - one GET through a call-scoped client
//! 4. [`response`] - return the body, or pull `data.reason` out of the grounding JSON
//!
//! [`JinaService`] composes the four and turns every failure into a string.
//!
//! ```ignore
//! let config = Arc::new(JinaConfig::from_env()?);
//! let service = JinaService::new(config);
//! let page = service.read("https://example.com").await;
//! let verdict = service.fact_check("the sky is green").await;
//! ```

pub mod request;
pub mod response;
pub mod service;
pub mod transport;
pub mod url;

pub use request::{Endpoint, JinaRequest};
pub use service::JinaService;
pub use transport::{HttpTransport, Transport, UpstreamResponse};
pub use url::is_valid_url;
