// ============= Error Types =============

/// Every way a tool call can fail.
///
/// Operations never hand these to their caller directly: the outer boundary
/// in [`crate::jina::JinaService`] renders them with `Display`, so the two
/// fixed-message variants double as the literal strings callers may match on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("JINAAI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Failed to fetch fact-check result")]
    FactCheckFailed,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
