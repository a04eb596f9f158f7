//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the articles API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect failure, DNS, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a 4xx status.
    #[error("request rejected ({status}): {body}")]
    ClientRejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The API answered with a 5xx or other non-success status.
    #[error("server error ({status}): {body}")]
    ServerRejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The configured base URL cannot be used.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Fieldless classification of a [`ClientError`], for callers that map
/// failures to messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    ClientRejected,
    ServerRejected,
    Decode,
    Config,
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::ClientRejected { .. } => ErrorKind::ClientRejected,
            Self::ServerRejected { .. } => ErrorKind::ServerRejected,
            Self::Decode(_) => ErrorKind::Decode,
            Self::InvalidBaseUrl { .. } => ErrorKind::Config,
        }
    }

    /// HTTP status for rejections, `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ClientRejected { status, .. } | Self::ServerRejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
