use jina_mcp::{
    JinaConfig, JinaMcpServer, JinaService,
    cli::{Cli, Commands, LogFormat, output::Output},
    mcp::start_stdio_server,
};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    init_tracing(cli.verbose, cli.log_format);

    let mut config = JinaConfig::from_env()?;
    if let Some(api_key) = cli.api_key.clone() {
        config = config.with_api_key(api_key);
    }
    let config = Arc::new(config);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.resolved_command() {
        Commands::Serve => {
            if !config.has_api_key() {
                tracing::warn!("JINAAI_API_KEY is not set; every tool call will report it");
            }
            start_stdio_server(config).await?;
        }
        Commands::Read { query_or_url } => {
            let service = JinaService::new(config);
            output.result(&service.read(&query_or_url).await);
        }
        Commands::FactCheck { query } => {
            let service = JinaService::new(config);
            output.result(&service.fact_check(&query).await);
        }
        Commands::Tools => {
            let server = JinaMcpServer::new(JinaService::new(config));
            output.header("Tools");
            for (name, description) in server.tool_summaries() {
                output.tool(&name, &description);
            }
            println!();
        }
        Commands::Config => {
            if !config.has_api_key() {
                output.warning("JINAAI_API_KEY is not set");
            }
            output.config(&config);
        }
    }

    Ok(())
}

/// Logs go to stderr: in `serve` mode stdout carries the MCP stream.
fn init_tracing(verbose: bool, format: LogFormat) {
    let default_level = if verbose { "jina_mcp=debug" } else { "jina_mcp=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
