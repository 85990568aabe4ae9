use thiserror::Error;

/// A failed lookup
///
/// Every variant is the same failure class to the search view: the previous
/// results stay on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Could not reach the service
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Service error ({code}): {body}")]
    Status { code: u16, body: String },

    /// The body was not the expected JSON shape
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// The configured service URL cannot be used
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            LookupError::Status {
                code: status.as_u16(),
                body: e.to_string(),
            }
        } else if e.is_decode() {
            LookupError::Payload(e.to_string())
        } else if e.is_builder() {
            LookupError::InvalidUrl(e.to_string())
        } else {
            LookupError::Network(e.to_string())
        }
    }
}
