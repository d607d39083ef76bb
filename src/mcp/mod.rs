//! Model Context Protocol surface: registers `read` and `fact_check` as tools.

pub mod server;

pub use server::{JinaMcpServer, start_stdio_server};
