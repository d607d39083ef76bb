//! # Jina MCP Server
//!
//! Exposes two Model Context Protocol tools backed by the Jina AI web APIs:
//!
//! - `read(query_or_url)` - absolute http(s) URLs go to the reader endpoint
//!   (`https://r.jina.ai/`), anything else to search (`https://s.jina.ai/`).
//!   The upstream body is returned verbatim.
//! - `fact_check(query)` - asks the grounding endpoint (`https://g.jina.ai/`)
//!   and returns the `data.reason` field of its JSON reply.
//!
//! Both tools always return a string. A missing `JINAAI_API_KEY`, a failed
//! fact-check and any transport or parse error are reported as text rather
//! than raised.
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use jina_mcp::{JinaConfig, JinaService};
//! use std::sync::Arc;
//!
//! let config = Arc::new(JinaConfig::from_env()?);
//! let service = JinaService::new(config);
//! println!("{}", service.read("https://example.com").await);
//! ```
//!
//! ## Modules
//!
//! - [`jina`] - URL classification, request building, transport and reducers
//! - [`mcp`] - rmcp tool registration and the stdio server
//! - [`cli`] - command-line parsing and output
//! - [`types`] - error type and `Result` alias
//! - [`utils`] - configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Command-line interface.
pub mod cli;
/// Jina AI reader, search and grounding operations.
pub mod jina;
/// Model Context Protocol (MCP) server integration.
pub mod mcp;
/// Core types (errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

pub use jina::{HttpTransport, JinaService, Transport};
pub use mcp::JinaMcpServer;
pub use types::{AppError, Result};
pub use utils::config::JinaConfig;
