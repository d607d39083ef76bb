//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the non-serving
//! subcommands. Nothing here may run in `serve` mode, where stdout belongs
//! to the MCP protocol.

use crate::utils::config::JinaConfig;
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print a tool result verbatim, for piping
    pub fn result(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            eprintln!("  [WARN] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a registered tool
    pub fn tool(&self, name: &str, description: &str) {
        if self.colored {
            println!("    {} {} {}", "•".blue(), name.cyan().bold(), description.dimmed());
        } else {
            println!("    - {} {}", name, description);
        }
    }

    /// Print the effective configuration; the key itself is never shown
    pub fn config(&self, config: &JinaConfig) {
        self.header("Configuration");
        self.kv("api key", credential_status(config));
        self.kv("reader", &config.reader_url);
        self.kv("search", &config.search_url);
        self.kv("grounding", &config.grounding_url);
        self.kv("timeout hint", &format!("{}s", config.timeout_hint));
        self.kv("locale", &config.locale);
        println!();
    }
}

/// How the credential is reported by `config`
pub fn credential_status(config: &JinaConfig) -> &'static str {
    if config.has_api_key() {
        "set"
    } else {
        "not set"
    }
}
