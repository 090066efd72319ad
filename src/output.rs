// Output envelope — the only thing this program prints to stdout.
//
// One line of JSON, non-ASCII emitted literally (serde_json's default), the
// `error` field present only on degraded runs. Everything diagnostic goes to
// stderr via tracing, never here.

use serde::{Deserialize, Serialize};

/// The sole externally observable output: `{"keywords": [...]}` with an
/// optional `error` on unrecoverable failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Ordered, deduplicated keywords — at most top-K entries, possibly empty
    pub keywords: Vec<String>,
    /// Short failure message, omitted entirely on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEnvelope {
    pub fn ok(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            error: None,
        }
    }

    /// Degraded envelope: no keywords, a short message. Paired with a
    /// non-zero exit code by the caller.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            keywords: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Serialize as a single JSON line.
    ///
    /// Falls back to a hand-built minimal envelope if serialization itself
    /// fails — the output contract holds even then.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"keywords\": [], \"error\": \"{e}\"}}"))
    }
}
