use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("remote store error: {0}")]
    Remote(#[from] RemoteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures surfaced by a [`crate::remote::RemoteStore`].
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connection dropped, timed out or the body was cut short. Worth another try.
    #[error("transient failure: {0}")]
    Transient(String),

    /// The credentials were revoked or expired.
    #[error("the credentials have been revoked or expired")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The request could not be built, e.g. a malformed URL.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn is_transient(&self) -> bool {
        matches!(self, RemoteError::Transient(_))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else if e.is_builder() {
            RemoteError::InvalidRequest(e.to_string())
        } else {
            RemoteError::Transient(e.to_string())
        }
    }
}
