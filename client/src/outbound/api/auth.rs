//! HTTP implementation of the authentication port.
//!
//! Login responses vary across backend revisions: the token has been
//! observed in several body fields, in the `Authorization` response header,
//! and as an `ft_token` cookie. Recovery probes each location in a fixed
//! order and stores the first usable value.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, SET_COOKIE};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::dispatcher::HttpDispatcher;
use crate::domain::auth::{LoginCredentials, LoginSession, SessionStatus, UserSummary};
use crate::domain::error::{DispatchError, DispatchResult};
use crate::domain::ports::{AuthSource, TokenStore};
use crate::domain::token::Token;

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const SESSION_PATH: &str = "/auth/session";

/// Body fields probed for the token, in precedence order.
const TOKEN_FIELD_PATHS: [&[&str]; 4] = [
    &["accessToken"],
    &["access_token"],
    &["token"],
    &["data", "token"],
];

const TOKEN_COOKIE_PREFIX: &str = "ft_token=";

#[derive(Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

/// Authentication adapter over the backend's `/auth` endpoints.
pub struct HttpAuthSource {
    dispatcher: HttpDispatcher,
    store: Arc<dyn TokenStore>,
}

impl HttpAuthSource {
    /// Build an adapter sharing the dispatcher's token store.
    #[must_use]
    pub fn new(dispatcher: HttpDispatcher, store: Arc<dyn TokenStore>) -> Self {
        Self { dispatcher, store }
    }
}

#[async_trait]
impl AuthSource for HttpAuthSource {
    async fn login(&self, credentials: &LoginCredentials) -> DispatchResult<LoginSession> {
        let response = self
            .dispatcher
            .post(
                LOGIN_PATH,
                &LoginRequest {
                    identifier: credentials.identifier(),
                    password: credentials.password(),
                },
            )
            .await?;
        let body: Value = response.json_value()?;

        let raw = token_from_body(&body)
            .map(str::to_owned)
            .or_else(|| token_from_headers(response.headers()));
        let token = raw.and_then(|candidate| Token::try_new(&candidate).ok());
        let Some(token) = token else {
            return Err(DispatchError::decode(
                "login succeeded but no token was found in the response",
            ));
        };

        let fingerprint = token.fingerprint();
        self.store.set(&token);
        debug!(token = %fingerprint, "login token stored");
        Ok(LoginSession {
            user: user_from_body(&body),
            token_fingerprint: fingerprint,
        })
    }

    async fn logout(&self) -> DispatchResult<()> {
        let result = self.dispatcher.post_empty(LOGOUT_PATH).await;
        // The local credential is dropped even when the backend call fails.
        self.store.clear();
        result.map(|_| ())
    }

    async fn session(&self) -> DispatchResult<SessionStatus> {
        let response = self.dispatcher.get(SESSION_PATH, &[]).await?;
        response.json()
    }
}

fn token_from_body(body: &Value) -> Option<&str> {
    TOKEN_FIELD_PATHS.iter().find_map(|path| {
        let mut cursor = body;
        for key in *path {
            cursor = cursor.get(key)?;
        }
        cursor.as_str().map(str::trim).filter(|raw| !raw.is_empty())
    })
}

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    token_from_authorization(headers).or_else(|| token_from_cookies(headers))
}

fn token_from_authorization(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let raw = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookie)
}

fn token_from_cookie(cookie: &str) -> Option<String> {
    let rest = cookie.strip_prefix(TOKEN_COOKIE_PREFIX)?;
    let raw = rest.split_once(';').map_or(rest, |(value, _)| value).trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

fn user_from_body(body: &Value) -> Option<UserSummary> {
    let record = body
        .get("user")
        .or_else(|| body.get("data").and_then(|data| data.get("user")))?;
    serde_json::from_value(record.clone()).ok()
}
