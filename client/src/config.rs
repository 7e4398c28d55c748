//! Client configuration parsing and validation.
//!
//! This module centralises the environment-driven origin settings so they
//! are validated consistently and can be tested in isolation. Debug builds
//! tolerate a missing or malformed origin and fall back to the local
//! development stack; release builds require explicit, valid values.

use mockable::Env;
use tracing::warn;
use url::Url;

/// Environment variable naming the backend API origin.
pub const BACKEND_URL_ENV: &str = "QUICKLY_BACKEND_URL";
/// Environment variable naming the frontend origin used for absolute links.
pub const FRONTEND_URL_ENV: &str = "QUICKLY_FRONTEND_URL";

const DEBUG_BACKEND_URL: &str = "http://localhost:3000";
const DEBUG_FRONTEND_URL: &str = "http://localhost:3001";
const URL_EXPECTED: &str = "an absolute http(s) URL";

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings for missing origins.
    Debug,
    /// Release builds require explicit, valid origins.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Origin settings derived from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL every API request is resolved against.
    pub backend_url: Url,
    /// Origin the navigation targets are rendered against.
    pub frontend_url: Url,
}

/// Errors raised while validating client configuration.
#[derive(thiserror::Error, Debug)]
pub enum ClientConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Name of the offending variable.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Human-readable description of what was expected.
        expected: &'static str,
    },
}

/// Build client settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use client::config::{BuildMode, client_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "QUICKLY_BACKEND_URL" => Some("https://api.quickly.example".to_string()),
///     "QUICKLY_FRONTEND_URL" => Some("https://quickly.example".to_string()),
///     _ => None,
/// });
///
/// let settings = client_settings_from_env(&env, BuildMode::Release)?;
/// assert_eq!(settings.backend_url.as_str(), "https://api.quickly.example/");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// In release mode, returns [`ClientConfigError`] when either origin is
/// missing or is not an absolute http(s) URL.
pub fn client_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<ClientSettings, ClientConfigError> {
    Ok(ClientSettings {
        backend_url: origin_from_env(env, mode, BACKEND_URL_ENV, DEBUG_BACKEND_URL)?,
        frontend_url: origin_from_env(env, mode, FRONTEND_URL_ENV, DEBUG_FRONTEND_URL)?,
    })
}

/// Build client settings from the process environment.
///
/// # Errors
///
/// Propagates [`ClientConfigError`] from [`client_settings_from_env`].
pub fn client_settings_from_process_env(
    mode: BuildMode,
) -> Result<ClientSettings, ClientConfigError> {
    client_settings_from_env(&mockable::DefaultEnv::new(), mode)
}

fn origin_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    debug_default: &str,
) -> Result<Url, ClientConfigError> {
    let value = match env.string(name) {
        Some(value) => value,
        None => {
            if mode.is_debug() {
                warn!("{} not set; using the local development origin", name);
                return debug_origin(name, debug_default);
            }
            return Err(ClientConfigError::MissingEnv { name });
        }
    };

    match parse_origin(&value) {
        Some(url) => Ok(url),
        None => {
            if mode.is_debug() {
                warn!(
                    value = %value,
                    "invalid {}; using the local development origin",
                    name
                );
                debug_origin(name, debug_default)
            } else {
                Err(ClientConfigError::InvalidEnv {
                    name,
                    value,
                    expected: URL_EXPECTED,
                })
            }
        }
    }
}

// The defaults are compile-time constants, so this only fails if one of
// them is edited into an invalid URL.
fn debug_origin(name: &'static str, raw: &str) -> Result<Url, ClientConfigError> {
    parse_origin(raw).ok_or(ClientConfigError::InvalidEnv {
        name,
        value: raw.to_owned(),
        expected: URL_EXPECTED,
    })
}

fn parse_origin(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if matches!(url.scheme(), "http" | "https") {
        Some(url)
    } else {
        None
    }
}
