//! Driven port for the backend's authentication endpoints.
//!
//! The domain owns the credential and session shapes so views and the
//! session probe stay adapter-agnostic.

use async_trait::async_trait;

use crate::domain::auth::{LoginCredentials, LoginSession, SessionStatus};
use crate::domain::error::{DispatchError, DispatchResult};

/// Port over `/auth/login`, `/auth/logout`, and `/auth/session`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthSource: Send + Sync {
    /// Authenticate with the backend.
    ///
    /// On success the recovered token has already been written to the
    /// token store; the returned session carries only the fingerprint.
    async fn login(&self, credentials: &LoginCredentials) -> DispatchResult<LoginSession>;

    /// End the backend session.
    ///
    /// The stored token is cleared whether or not the request succeeds.
    async fn logout(&self) -> DispatchResult<()>;

    /// Ask the backend whether the current credential is authenticated.
    async fn session(&self) -> DispatchResult<SessionStatus>;
}

/// Fixture implementation behaving like a logged-out backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAuthSource;

#[async_trait]
impl AuthSource for FixtureAuthSource {
    async fn login(&self, _credentials: &LoginCredentials) -> DispatchResult<LoginSession> {
        Err(DispatchError::auth("fixture source accepts no credentials"))
    }

    async fn logout(&self) -> DispatchResult<()> {
        Ok(())
    }

    async fn session(&self) -> DispatchResult<SessionStatus> {
        Ok(SessionStatus::unauthenticated())
    }
}
