/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types shared by the token and resource calls

use reqwest::StatusCode;

/// Broad classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout or a non-2xx status
    Transport,
    /// Body not valid JSON, or an expected field is absent
    Protocol,
    /// Invalid input detected before anything was sent
    Usage,
}

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request could not be sent or the response could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside 2xx
    #[error("unexpected status {status}: {body}")]
    Unexpected {
        /// Status returned by the server
        status: StatusCode,
        /// Raw response body, possibly empty
        body: String,
    },

    /// A JSON body was required but the response was something else
    #[error("invalid json response: {0}")]
    InvalidJson(String),

    /// The JSON response lacks a required field
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Serialization or deserialization of a payload failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// A header name or value is not valid HTTP
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl AppError {
    /// Returns the kind of failure this error represents
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) | AppError::Unexpected { .. } => ErrorKind::Transport,
            AppError::InvalidJson(_) | AppError::MissingField(_) | AppError::Json(_) => {
                ErrorKind::Protocol
            }
            AppError::InvalidUrl(_) | AppError::InvalidHeader(_) => ErrorKind::Usage,
        }
    }

    /// Status code of the failed response, when the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
