#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("API error (status {status}): {message}")]
    Api { status: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl ScanError {
    /// HTTP status code carried by this error, if it came from the transport.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScanError::Status { status, .. } => Some(*status),
            ScanError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
