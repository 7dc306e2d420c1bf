use thiserror::Error;

/// Failures from the managed data store or the HTTP plumbing in front of it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store answered with a non-success status. Display is the
    /// message the store reported, unchanged.
    #[error("{message}")]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            code: None,
            message: message.into(),
        }
    }
}

/// Client-side validation failures; these never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
}
