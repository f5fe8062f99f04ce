/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body returned by the OAuth2 token endpoint
///
/// Only `access_token` is required; the other fields are informational and
/// anything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token for resource requests
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, usually "Bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Scopes granted by the server
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Reads the string fields of a token payload
    ///
    /// Fields that are missing or not strings are left as `None`, so an
    /// oddly typed `scope` never hides a valid `access_token`.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            access_token: field("access_token"),
            token_type: field("token_type"),
            scope: field("scope"),
        }
    }

    /// Converts the response into an [`AccessToken`]
    ///
    /// Returns `None` when `access_token` is absent or empty.
    #[must_use]
    pub fn into_access_token(self) -> Option<AccessToken> {
        self.access_token
            .filter(|token| !token.is_empty())
            .map(AccessToken::new)
    }
}

/// Bearer token obtained from the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, as sent after `Bearer `
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Full `Authorization` header value
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
