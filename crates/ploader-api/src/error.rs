use thiserror::Error;

/// Errors returned by the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A multipart JSON field could not be encoded.
    #[error("failed to encode multipart field '{field}': {source}")]
    Encode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A multipart file part could not be built (e.g. malformed MIME type).
    #[error("invalid multipart part '{field}': {reason}")]
    InvalidPart { field: &'static str, reason: String },

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// HTTP status carried by a [`ApiError::Status`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
