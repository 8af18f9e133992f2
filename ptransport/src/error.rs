//! Shared transport error kinds and error value helpers.
//!
//! ```rust
//! use ptransport::{TransportError, TransportErrorKind};
//!
//! let error = TransportError::from_status(429, "slow down");
//! assert_eq!(error.kind, TransportErrorKind::RateLimited);
//! assert_eq!(error.status, Some(429));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Authentication,
    RateLimited,
    InvalidRequest,
    Timeout,
    Connection,
    Unavailable,
    Status,
    MalformedResponse,
    EmptyResponse,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    /// HTTP status of the failed response, when the failure came from one.
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            401 | 403 => TransportErrorKind::Authentication,
            429 => TransportErrorKind::RateLimited,
            408 | 504 => TransportErrorKind::Timeout,
            400 | 422 => TransportErrorKind::InvalidRequest,
            502 | 503 => TransportErrorKind::Unavailable,
            _ => TransportErrorKind::Status,
        };

        Self::new(kind, message).with_status(status)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Authentication, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::RateLimited, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::InvalidRequest, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Connection, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Unavailable, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::MalformedResponse, message)
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::EmptyResponse, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Other, message)
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} (status {status}): {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for TransportError {}
