//! Bearer token value object with credential-safe logging support.
//!
//! The token is the only credential this client ever persists. Keep the
//! material out of logs: `Debug` is redacted and the truncated SHA-256
//! fingerprint is the only identifier that may appear in diagnostics.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Domain error returned when token material is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    /// Token material was missing or blank once trimmed.
    Empty,
}

impl fmt::Display for TokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "token must not be empty"),
        }
    }
}

impl std::error::Error for TokenValidationError {}

/// Opaque bearer credential for the backend API.
///
/// ## Invariants
/// - Material is non-empty after trimming surrounding whitespace.
/// - The raw material never appears in `Debug` output; use
///   [`Token::fingerprint`] for diagnostics.
///
/// # Examples
/// ```
/// use client::domain::Token;
///
/// let token = Token::try_new("  abc123  ").unwrap();
/// assert_eq!(token.as_str(), "abc123");
/// assert_eq!(token.fingerprint().len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Token(Zeroizing<String>);

impl Token {
    /// Construct a token from raw material, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TokenValidationError::Empty`] when the trimmed material is
    /// empty.
    pub fn try_new(raw: &str) -> Result<Self, TokenValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenValidationError::Empty);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Token material for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Truncated SHA-256 fingerprint of the token material.
    ///
    /// Returns the first 8 bytes of the hash as a 16-character hex string,
    /// enough to distinguish tokens in logs without exposing the credential.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let result = hasher.finalize();
        hex::encode(&result[..FINGERPRINT_BYTES])
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token")
            .field(&format_args!("fp={}", self.fingerprint()))
            .finish()
    }
}
