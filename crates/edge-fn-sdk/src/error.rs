//! Error types for edge function handlers

use thiserror::Error;

/// Errors that can occur in a handler or its invocation loop
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            _ => 500,
        }
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            serde_json::json!({
                "error": self.to_string()
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let err = HandlerError::BadRequest("missing field".to_string());
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(HandlerError::Internal("boom".into()).status_code(), 500);
        assert_eq!(HandlerError::Ipc("pipe closed".into()).status_code(), 500);
    }

    #[test]
    fn error_response_carries_the_message() {
        let response = HandlerError::Internal("boom".to_string()).to_response();
        assert_eq!(response.status, 500);
        let body: serde_json::Value =
            serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["error"], "Internal error: boom");
    }
}
