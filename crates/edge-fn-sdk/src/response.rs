//! Response envelope returned to the invoking host

use serde::{Deserialize, Serialize};

/// The `{statusCode, body}` envelope the invocation protocol expects.
///
/// The body is a JSON-encoded string, not a nested object: [`Response::ok`]
/// and [`Response::json`] serialize their argument and store the resulting
/// text, so the envelope for a greeting serializes as
/// `{"statusCode":200,"body":"{\"message\":\"...\"}"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code
    #[serde(rename = "statusCode")]
    pub status: u16,

    /// JSON-encoded response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Response {
    /// Create a new response with the given status code (no body).
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Create a 200 OK response with a JSON-encoded body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"message": "Jan 1st 24"}))
    /// ```
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a response with a custom status code and JSON-encoded body.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(500, json!({"error": "something went wrong"}))
    /// ```
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        Self {
            status,
            body: serde_json::to_string(&body).ok(),
        }
    }

    /// Set a pre-encoded body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}
