//! CLI module for the Jina MCP server
//!
//! Provides command-line interface parsing for the jina-mcp-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand, ValueEnum};

/// Jina AI tools over the Model Context Protocol
///
/// Exposes `read` (reader / search) and `fact_check` (grounding) as MCP tools
/// on stdio. The tools can also be run once from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "jina-mcp-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Jina AI read and fact-check tools over MCP",
    after_help = "EXAMPLES:\n    \
                  jina-mcp-server                               # Serve MCP tools on stdio\n    \
                  jina-mcp-server read https://example.com      # Read a page once\n    \
                  jina-mcp-server read \"rust async runtimes\"    # Search once\n    \
                  jina-mcp-server fact-check \"the sky is green\" # Fact-check once"
)]
pub struct Cli {
    /// Jina AI API key (overrides JINAAI_API_KEY from the environment or .env)
    #[arg(long, env = "JINAAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the tools over MCP stdio (default)
    Serve,

    /// Run the read tool once and print the result
    Read {
        /// URL to read, or a free-text search query
        query_or_url: String,
    },

    /// Run the fact_check tool once and print the result
    FactCheck {
        /// Statement to fact-check
        query: String,
    },

    /// List the registered MCP tools
    Tools,

    /// Show the effective configuration
    Config,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run, `serve` when none was given
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
