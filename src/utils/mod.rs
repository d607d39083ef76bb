/// Environment-driven configuration for the Jina upstreams.
pub mod config;
