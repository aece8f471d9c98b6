use thiserror::Error;

/// Errors returned by the booking API client.
///
/// `Api` carries the message extracted from the upstream error body so the
/// page can surface the server-provided text directly.
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ApiClientError {
    /// Upstream HTTP status for `Api` errors, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Api { status, .. } => Some(*status),
            ApiClientError::Http(_) => None,
        }
    }
}
