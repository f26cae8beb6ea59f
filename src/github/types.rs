// GitHub API response types.
// Raw records stay as JSON values; only envelopes and error bodies are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search endpoint envelope (`/search/repositories`, `/search/issues`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Error body returned with non-success responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// Login of a raw organization record, if present.
pub fn org_login(record: &Value) -> Option<&str> {
    record.get("login").and_then(Value::as_str)
}
