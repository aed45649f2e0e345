//! Credentials attached by [`HttpExecutor`](crate::transport::HttpExecutor).

use std::fmt;

/// How requests are authenticated.
///
/// Event Streams API keys are sent as basic credentials with the literal
/// username `token`; see [`Authenticator::api_key`].
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Authenticator {
    #[default]
    NoAuth,
    Basic {
        username: String,
        password: String,
    },
    BearerToken(String),
}

impl Authenticator {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authenticator::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self::basic("token", key)
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Authenticator::BearerToken(token.into())
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Authenticator::NoAuth => request,
            Authenticator::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Authenticator::BearerToken(token) => request.bearer_auth(token),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Authenticator::NoAuth => "noauth",
            Authenticator::Basic { .. } => "basic",
            Authenticator::BearerToken(_) => "bearerToken",
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authenticator::NoAuth => f.write_str("NoAuth"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Authenticator::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
        }
    }
}
