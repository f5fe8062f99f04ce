/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    COUNTRIES_SCOPE, DEFAULT_TIMEOUT_SECS, MRD_BASE_URL, MRD_TOKEN_ENDPOINT, PDS_BASE_URL,
    PDX_SCOPE, PDX_TOKEN_ENDPOINT,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

const DEFAULT_CLIENT_ID: &str = "abcd1234-abcd-1234-abcd-123456abcdef";
const DEFAULT_CLIENT_SECRET: &str = "CHANGEME";

/// OAuth2 client credentials issued to the calling application
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
}

impl Credentials {
    /// Creates a credential pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Token endpoint settings
pub struct OAuthConfig {
    /// Full URL of the OAuth2 token endpoint
    pub token_endpoint: String,
    /// Space separated scopes requested with the token
    pub scope: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Base URLs and timeout of the resource APIs
pub struct RestApiConfig {
    /// Base URL of the master reference data API
    pub mrd_base_url: String,
    /// Base URL of the personal data store API
    pub pds_base_url: String,
    /// Timeout in seconds for every request, token request included
    pub timeout: u64,
}

impl RestApiConfig {
    /// Timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Member and connection identifiers for PDS calls
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MemberConfig {
    /// Member uid, sent as the `uid` query parameter
    pub uid: String,
    /// Member key, sent in the `Connection-Token` header
    pub key: String,
    /// Connection id, sent as the `con_id` query parameter
    pub connection_id: String,
    /// Connection nid used by identify
    pub connection_nid: String,
    /// Shared connection token; only its hash leaves the process
    pub connection_token: String,
}

impl fmt::Debug for MemberConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberConfig")
            .field("uid", &self.uid)
            .field("key", &"<redacted>")
            .field("connection_id", &self.connection_id)
            .field("connection_nid", &self.connection_nid)
            .field("connection_token", &"<redacted>")
            .finish()
    }
}

/// Main configuration for the Mydex client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OAuth2 client credentials
    pub credentials: Credentials,
    /// Token endpoint settings
    pub oauth: OAuthConfig,
    /// Resource API settings
    pub rest_api: RestApiConfig,
    /// Member and connection identifiers
    pub member: MemberConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration for the PDX sandbox
    ///
    /// Values come from the environment (and a `.env` file when present);
    /// unset values fall back to the sandbox defaults. The scope defaults to
    /// `mydex:pdx`.
    pub fn new() -> Self {
        Self::from_env(PDX_TOKEN_ENDPOINT, PDX_SCOPE)
    }

    /// Loads the configuration for the MRD production API
    ///
    /// Same environment variables as [`Config::new`], with the production
    /// token endpoint and the `countries` scope as defaults.
    pub fn for_mrd() -> Self {
        Self::from_env(MRD_TOKEN_ENDPOINT, COUNTRIES_SCOPE)
    }

    /// Replaces the default scope unless `MYDEX_SCOPE` is set
    #[must_use]
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.oauth.scope = get_env_or_none("MYDEX_SCOPE").unwrap_or_else(|| scope.to_string());
        self
    }

    fn from_env(default_token_endpoint: &str, default_scope: &str) -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("MYDEX_CLIENT_ID", String::from(DEFAULT_CLIENT_ID));
        let client_secret =
            get_env_or_default("MYDEX_CLIENT_SECRET", String::from(DEFAULT_CLIENT_SECRET));

        if client_id == DEFAULT_CLIENT_ID {
            error!("MYDEX_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == DEFAULT_CLIENT_SECRET {
            error!("MYDEX_CLIENT_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            oauth: OAuthConfig {
                token_endpoint: get_env_or_default(
                    "MYDEX_TOKEN_ENDPOINT",
                    default_token_endpoint.to_string(),
                ),
                scope: get_env_or_default("MYDEX_SCOPE", default_scope.to_string()),
            },
            rest_api: RestApiConfig {
                mrd_base_url: get_env_or_default("MYDEX_MRD_BASE_URL", MRD_BASE_URL.to_string()),
                pds_base_url: get_env_or_default("MYDEX_PDS_BASE_URL", PDS_BASE_URL.to_string()),
                timeout: get_env_or_default("MYDEX_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            member: MemberConfig {
                uid: get_env_or_default("MYDEX_MEMBER_UID", String::from("1234")),
                key: get_env_or_default(
                    "MYDEX_MEMBER_KEY",
                    String::from("ABCDEFGHIJKLMNOP123456789"),
                ),
                connection_id: get_env_or_default("MYDEX_CONNECTION_ID", String::from("1234-45678")),
                connection_nid: get_env_or_default("MYDEX_CONNECTION_NID", String::from("45678")),
                connection_token: get_env_or_default(
                    "MYDEX_CONNECTION_TOKEN",
                    String::from("abcdefghijklmnopqrstuvwxyz123456789"),
                ),
            },
        }
    }
}
