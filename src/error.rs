//! Error types for the Future Realtime client.

use thiserror::Error;

/// Result type for Future Realtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a queue transport or connector.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types for the Future Realtime client.
#[derive(Error, Debug)]
pub enum Error {
    /// The protocol passed at construction is neither `http` nor `amqp`.
    #[error("Invalid Future Realtime API protocol: {0}")]
    InvalidProtocol(String),

    /// The HTTP transport produced no response at all.
    #[error("Future Realtime API empty response from path: {path}")]
    EmptyResponse {
        /// Request path
        path: String,
    },

    /// The API answered with a status code other than 200.
    #[error(
        "Future Realtime API bad response status code.\nPath: {path}\nStatus code: {status}\nResponse body: {body}"
    )]
    BadStatusCode {
        /// Request path
        path: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body is not valid JSON, or is a bare JSON `null`.
    #[error("Future Realtime API invalid json body from path: {path}")]
    InvalidResponseBody {
        /// Request path
        path: String,
    },

    /// Network or HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// Failure reported by the queue transport, passed through untouched.
    #[error(transparent)]
    Queue(BoxError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_code_message() {
        let err = Error::BadStatusCode {
            path: "/yandex/catalog".into(),
            status: 500,
            body: "Internal server error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Path: /yandex/catalog"));
        assert!(msg.contains("Status code: 500"));
        assert!(msg.contains("Response body: Internal server error"));
    }

    #[test]
    fn test_queue_error_is_transparent() {
        let inner: BoxError = "connection refused".into();
        let err = Error::Queue(inner);
        assert_eq!(err.to_string(), "connection refused");
    }
}
