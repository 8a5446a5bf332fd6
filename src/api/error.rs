//! Errors returned by the order API

use thiserror::Error;

/// A failed order submission
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("order rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Rejected { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
