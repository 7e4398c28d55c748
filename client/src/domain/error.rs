//! Shared error taxonomy for outbound API calls.
//!
//! Every port that reaches the backend reports one of these variants. The
//! `Display` strings are written for direct surfacing in views, so they
//! carry the backend-supplied message where one was extracted.

/// Errors surfaced while dispatching calls to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Transport failed before any response arrived.
    #[error("network error: {message}")]
    Network {
        /// Transport diagnostic from the HTTP client.
        message: String,
    },
    /// The backend rejected the credential (HTTP 401). The token
    /// store has already been cleared when this is returned.
    #[error("authentication required: {message}")]
    Auth {
        /// Rejection message recovered from the response body.
        message: String,
    },
    /// The backend answered with a non-success status other than 401.
    #[error("request failed (status {status}): {message}")]
    Api {
        /// HTTP status code of the rejected response.
        status: u16,
        /// Message recovered from the error body, or the bare status
        /// text when the body carried none.
        message: String,
    },
    /// A response arrived but did not match the documented contract.
    #[error("response decode failed: {message}")]
    Decode {
        /// Decoder diagnostic for the malformed body.
        message: String,
    },
}

impl DispatchError {
    /// Convenience constructor for [`DispatchError::Network`].
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`DispatchError::Auth`].
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`DispatchError::Api`].
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`DispatchError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Convenient result alias for dispatching ports.
pub type DispatchResult<T> = Result<T, DispatchError>;
