use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JSON envelope for every API response: `{ok, result | error, trace?}`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error chain for internal failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
            trace: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(message.to_string()),
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: String) -> Self {
        self.trace = Some(trace);
        self
    }
}
