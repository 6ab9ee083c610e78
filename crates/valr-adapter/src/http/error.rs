/*
[INPUT]:  Error sources (transport, signing, status, encoding, decoding)
[OUTPUT]: Structured error types with operation context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the VALR adapter
#[derive(Error, Debug)]
pub enum ValrError {
    /// Network or connection failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be read for signing
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// Server answered with a non-2xx status
    #[error("{code} status code received")]
    Status { code: u16 },

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request options could not be encoded as query parameters
    #[error("failed to encode request params: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential material cannot be sent as a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Path argument that cannot be sent as a single URL segment
    #[error("invalid path segment {0:?}")]
    InvalidPathSegment(String),

    /// Amount text that does not parse as a Decimal without rounding
    #[error("invalid decimal amount {value:?}: {source}")]
    InvalidAmount {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Private endpoint called on a client without credentials
    #[error("credentials are required for private endpoints")]
    MissingCredentials,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure annotated with the operation that produced it
    #[error("{operation}: {source}")]
    Context {
        operation: &'static str,
        #[source]
        source: Box<ValrError>,
    },
}

impl ValrError {
    /// Wrap the error with a short description of the failed operation
    pub fn context(self, operation: &'static str) -> Self {
        ValrError::Context {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through any context wrappers
    pub fn root_cause(&self) -> &ValrError {
        match self {
            ValrError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// The operation description, if the error carries one
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ValrError::Context { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// HTTP status code for non-2xx responses
    pub fn status_code(&self) -> Option<u16> {
        match self.root_cause() {
            ValrError::Status { code } => Some(*code),
            _ => None,
        }
    }

    /// The server rejected the request
    pub fn is_status_failure(&self) -> bool {
        self.status_code().is_some()
    }

    /// The server accepted the request but replied with an unexpected body
    pub fn is_decode_error(&self) -> bool {
        matches!(self.root_cause(), ValrError::Decode(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self.root_cause(), ValrError::Transport(_))
    }
}

/// Result type alias for VALR operations
pub type Result<T> = std::result::Result<T, ValrError>;
