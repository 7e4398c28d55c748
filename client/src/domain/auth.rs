//! Authentication primitives: login credentials and session facts.
//!
//! Keep wire payload parsing outside the views by exposing constructors
//! that validate string inputs before an orchestrator talks to a port.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Identifier was missing or blank once trimmed.
    EmptyIdentifier,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "identifier must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials sent to the `/auth/login` endpoint.
///
/// ## Invariants
/// - `identifier` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use client::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("cook@example.com", "secret").unwrap();
/// assert_eq!(creds.identifier(), "cook@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    identifier: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw identifier/password inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginValidationError`] naming the first blank part.
    pub fn try_from_parts(identifier: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = identifier.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyIdentifier);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            identifier: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Identifier string (email or username) used for the login lookup.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Minimal user record attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Backend-issued user identifier.
    pub id: String,
    /// Email address the account was registered with.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Derived authentication fact, recomputed per probe and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether the backend recognises the current credential.
    #[serde(default)]
    pub authenticated: bool,
    /// User summary supplied alongside an authenticated session.
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl SessionStatus {
    /// Status for an unauthenticated or unverifiable session.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }

    /// Status for an authenticated session with an optional user summary.
    #[must_use]
    pub const fn authenticated(user: Option<UserSummary>) -> Self {
        Self {
            authenticated: true,
            user,
        }
    }
}

/// Result of a successful login.
///
/// The recovered token is already written to the token store by the time
/// this value is returned; only the fingerprint travels further so call
/// sites can log which credential became active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// User summary when the login response carried one.
    pub user: Option<UserSummary>,
    /// Fingerprint of the stored token, for diagnostics.
    pub token_fingerprint: String,
}
