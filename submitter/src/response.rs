use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded reply of the evaluation API. The body is kept as opaque JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

/// Payload of the `{"error": {"code": .., "message": ..}}` envelope the
/// evaluation server sends when it rejects a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn error_body(&self) -> Option<ErrorBody> {
        ErrorEnvelope::deserialize(&self.body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.body, f)
    }
}
