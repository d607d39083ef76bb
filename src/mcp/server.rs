use crate::jina::JinaService;
use crate::utils::config::JinaConfig;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parameters for the read tool
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ReadParams {
    /// A URL to read, or a free-text search query
    pub query_or_url: String,
}

/// Parameters for the fact_check tool
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct FactCheckParams {
    /// The statement to fact-check
    pub query: String,
}

/// MCP server exposing the Jina reader, search and grounding endpoints
#[derive(Clone)]
pub struct JinaMcpServer {
    service: JinaService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JinaMcpServer {
    pub fn new(service: JinaService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Name and description of every registered tool
    pub fn tool_summaries(&self) -> Vec<(String, String)> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| {
                let description = tool.description.as_deref().unwrap_or_default().to_string();
                (tool.name.to_string(), description)
            })
            .collect()
    }

    #[tool(description = "Read content from a URL or perform a search query.")]
    async fn read(&self, params: Parameters<ReadParams>) -> Result<CallToolResult, McpError> {
        let text = self.service.read(&params.0.query_or_url).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Perform a fact-checking query.")]
    async fn fact_check(
        &self,
        params: Parameters<FactCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.service.fact_check(&params.0.query).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for JinaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "jina-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Jina AI tools: `read` fetches a URL as text or searches the web for a query, \
                 `fact_check` grounds a statement against web sources"
                    .into(),
            ),
        }
    }
}

/// Start the MCP server with stdio transport
pub async fn start_stdio_server(config: Arc<JinaConfig>) -> crate::types::Result<()> {
    use rmcp::{ServiceExt, transport::io::stdio};

    let server = JinaMcpServer::new(JinaService::new(config));
    let transport = stdio();

    tracing::info!("Serving MCP tools over stdio");

    let running = server
        .serve(transport)
        .await
        .map_err(|e| crate::types::AppError::Internal(format!("MCP server error: {}", e)))?;

    let reason = running
        .waiting()
        .await
        .map_err(|e| crate::types::AppError::Internal(format!("MCP server error: {}", e)))?;

    tracing::info!(?reason, "MCP client disconnected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    fn server_without_key() -> JinaMcpServer {
        JinaMcpServer::new(JinaService::new(Arc::new(JinaConfig::default())))
    }

    #[test]
    fn test_registers_both_tools() {
        let server = server_without_key();
        let mut names: Vec<String> = server
            .tool_summaries()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["fact_check", "read"]);
    }

    #[test]
    fn test_server_info_enables_tools() {
        let info = server_without_key().get_info();
        assert_eq!(info.server_info.name, "jina-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_missing_key_is_returned_as_content() {
        let server = server_without_key();

        let result = server
            .read(Parameters(ReadParams {
                query_or_url: "https://example.com".to_string(),
            }))
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "JINAAI_API_KEY environment variable is not set"
        );

        let result = server
            .fact_check(Parameters(FactCheckParams {
                query: "the sky is green".to_string(),
            }))
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "JINAAI_API_KEY environment variable is not set"
        );
    }
}
