//! Port for the one persisted credential: the bearer token.
//!
//! The contract deliberately has no error surface. Storage failures are
//! swallowed: `get` reads as absent and `set`/`clear` do nothing
//! observable, because a client that cannot persist a token behaves like a
//! client that was never logged in. Implementations log at `warn!` when
//! they swallow a failure.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::token::Token;

/// Port over client-local credential storage.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Currently stored token, when one exists.
    fn get(&self) -> Option<Token>;

    /// Store `token`, replacing any previous value.
    fn set(&self, token: &Token);

    /// Remove any stored token.
    fn clear(&self);
}

/// Process-local store for interactive sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<Token>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Token>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Token> {
        self.slot().clone()
    }

    fn set(&self, token: &Token) {
        *self.slot() = Some(token.clone());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

/// Store for rendering contexts without client storage.
///
/// Reads are always absent and writes vanish, matching the contract for an
/// environment that has nowhere to keep a credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTokenStore;

impl TokenStore for DisabledTokenStore {
    fn get(&self) -> Option<Token> {
        None
    }

    fn set(&self, _token: &Token) {}

    fn clear(&self) {}
}
