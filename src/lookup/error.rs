use thiserror::Error;

/// Rejected before anything leaves the machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid YouTube URL.")]
    EmptyInput,
}

/// How a submitted lookup can fail. `Display` is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No response at all (refused, unreachable, body cut off, task died).
    #[error("Could not reach the backend server. (If running locally, make sure the API server is up.)")]
    Transport { detail: String },
    /// Non-2xx answer. `message` is the service's `error` field or the generic fallback.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// 2xx answer that is not a recognizable result.
    #[error("Unexpected response from the server.")]
    Malformed { detail: String },
}

impl LookupError {
    pub const SERVICE_FALLBACK: &'static str = "Failed to fetch data from the server.";

    /// Build a service error from a failure body, honoring its `error` field.
    pub fn from_failure_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").cloned())
            .and_then(|e| match e {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) if s.is_empty() => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| Self::SERVICE_FALLBACK.to_string());
        LookupError::Service { status, message }
    }
}
