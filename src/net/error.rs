//! API failure classification.
//!
//! ERROR HANDLING
//! ==============
//! CRUD calls surface these to screens, which flatten them into a message
//! line. The profile path never sees them: session fetch failures collapse
//! to "no profile" before reaching callers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a backend REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no stored credential")]
    MissingCredential,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure means the credential is missing or rejected,
    /// as opposed to the backend being unreachable or unhappy.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
