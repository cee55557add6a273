//! Error types for the HTTP facade.
//!
//! # Design
//! Three kinds cover the whole lifecycle: the URI argument was the wrong
//! shape (`InvalidUri`, caught before any I/O), the transport could not be
//! prepared (`RequestFailure`, nothing was sent), or the transport ran and
//! the call failed (`NetworkError`, carries the native error code). Failures
//! that involve a request keep the originating request so callers can decide
//! whether to retry; the facade itself never retries or swallows anything.

use std::fmt;

use crate::http::Request;

/// Errors returned by [`Http`](crate::Http) operations.
#[derive(Debug)]
pub enum HttpError {
    /// The URI argument was not a recognized absolute URI.
    InvalidUri { uri: String, message: String },

    /// The transport handle could not be prepared; no bytes were sent.
    RequestFailure { request: Request, message: String },

    /// The transport ran but the call failed (DNS failure, connection
    /// refused, timeout). `code` is the native transport error code and
    /// `message` combines it with the native description.
    NetworkError {
        request: Request,
        code: u32,
        message: String,
    },
}

impl HttpError {
    /// The request involved in the failure, where one was built.
    pub fn request(&self) -> Option<&Request> {
        match self {
            HttpError::InvalidUri { .. } => None,
            HttpError::RequestFailure { request, .. } => Some(request),
            HttpError::NetworkError { request, .. } => Some(request),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::InvalidUri { uri, message } => {
                write!(f, "invalid request URI {uri:?}: {message}")
            }
            HttpError::RequestFailure { message, .. } => {
                write!(f, "request could not be sent: {message}")
            }
            HttpError::NetworkError { message, .. } => {
                write!(f, "request failed due to network issues: {message}")
            }
        }
    }
}

impl std::error::Error for HttpError {}
