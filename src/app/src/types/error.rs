use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a request against the authentication API
///
/// Client side validation problems never become an `AuthFailure`; they are
/// rendered by the form before any request is issued.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthFailure {
    /// The API answered with a non-success status
    #[error("{0}")]
    Request(String),
    /// The request did not complete or the answer could not be decoded
    #[error("{0}")]
    Network(String),
}

impl AuthFailure {
    /// The message shown to the user
    pub fn message(&self) -> &str {
        match self {
            Self::Request(msg) | Self::Network(msg) => msg,
        }
    }
}
