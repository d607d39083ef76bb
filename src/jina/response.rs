//! Reducing upstream bodies to the string a tool returns.

use crate::types::{AppError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Grounding endpoint reply. Only the fields the reducer reads are modelled;
/// each is optional so a missing one becomes an [`AppError::InvalidResponse`]
/// rather than a generic parse failure.
///
/// `code` is `None` only when the key is absent. An explicit `null` arrives
/// as `Some(Value::Null)` and counts as a non-200 code.
#[derive(Debug, Deserialize)]
pub struct FactCheckResponse {
    #[serde(default, deserialize_with = "present")]
    pub code: Option<Value>,
    pub data: Option<FactCheckData>,
}

#[derive(Debug, Deserialize)]
pub struct FactCheckData {
    pub reason: Option<String>,
}

impl FactCheckResponse {
    /// Only the embedded `code` decides success; the HTTP status is ignored.
    pub fn is_success(&self) -> bool {
        self.code.as_ref().and_then(Value::as_f64) == Some(200.0)
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// `read` returns the body untouched, whatever the status.
pub fn reduce_read(body: String) -> String {
    body
}

pub fn reduce_fact_check(body: &str) -> Result<String> {
    let document: FactCheckResponse = serde_json::from_str(body)?;

    if document.code.is_none() {
        return Err(AppError::InvalidResponse("missing field `code`".to_string()));
    }
    if !document.is_success() {
        return Err(AppError::FactCheckFailed);
    }

    document
        .data
        .ok_or_else(|| AppError::InvalidResponse("missing field `data`".to_string()))?
        .reason
        .ok_or_else(|| AppError::InvalidResponse("missing field `data.reason`".to_string()))
}
