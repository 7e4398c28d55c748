//! Startup session probe.
//!
//! The probe asks the backend whether the stored credential is still valid.
//! It deliberately swallows every failure: an unreachable backend, an error
//! status, or an undecodable body all read as a signed-out session, so the
//! probe can never block startup. Callers needing the distinction between
//! "signed out" and "backend down" should call the auth port directly.

use std::sync::Arc;

use tracing::debug;

use crate::domain::auth::SessionStatus;
use crate::domain::ports::AuthSource;

/// Probe reporting the backend's view of the current session.
#[derive(Clone)]
pub struct SessionProbe<A> {
    source: Arc<A>,
}

impl<A> SessionProbe<A> {
    /// Create a probe over the given auth source.
    pub fn new(source: Arc<A>) -> Self {
        Self { source }
    }
}

impl<A: AuthSource> SessionProbe<A> {
    /// Query `/auth/session`, reading any failure as signed out.
    pub async fn probe(&self) -> SessionStatus {
        match self.source.session().await {
            Ok(status) => status,
            Err(error) => {
                debug!(error = %error, "session probe failed; treating as signed out");
                SessionStatus::unauthenticated()
            }
        }
    }
}
