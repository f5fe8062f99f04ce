/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! OAuth2 client-credentials token fetching
//!
//! Credentials are sent with HTTP Basic authentication. The client id and
//! secret are percent-encoded independently before being joined with `:`
//! and base64-encoded, which is what the Mydex token endpoint expects.

use crate::application::config::Config;
use crate::constants::{CLIENT_CREDENTIALS_GRANT, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{AccessToken, TokenResponse};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Everything except the RFC 3986 unreserved characters gets escaped
const CREDENTIAL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the `Authorization` header value for the token request
///
/// # Example
/// ```
/// use mydex_client::application::auth::basic_auth_header;
///
/// assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
#[must_use]
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let id = utf8_percent_encode(client_id, CREDENTIAL_ENCODE_SET);
    let secret = utf8_percent_encode(client_secret, CREDENTIAL_ENCODE_SET);
    let token = STANDARD.encode(format!("{id}:{secret}"));
    format!("Basic {token}")
}

/// Fetches access tokens from the configured token endpoint
///
/// Every call to [`Auth::fetch_token`] performs exactly one request; tokens
/// are neither cached nor refreshed.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
}

impl Auth {
    /// Creates a new Auth instance with its own HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the token endpoint
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates an Auth instance sharing an existing HTTP client
    pub fn with_client(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Requests an access token with the client-credentials grant
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The token from a 2xx JSON response
    /// * `Err(AppError)` - Transport failure, non-2xx status, non-JSON body,
    ///   or a body without `access_token`
    pub async fn fetch_token(&self) -> Result<AccessToken, AppError> {
        let oauth = &self.config.oauth;
        let credentials = &self.config.credentials;

        info!("Requesting a token");
        debug!(
            "POST {} scope={:?} client_id={}",
            oauth.token_endpoint, oauth.scope, credentials.client_id
        );

        let form = [
            ("grant_type", CLIENT_CREDENTIALS_GRANT),
            ("scope", oauth.scope.as_str()),
        ];

        let response = self
            .client
            .post(&oauth.token_endpoint)
            .header(
                AUTHORIZATION,
                basic_auth_header(&credentials.client_id, &credentials.client_secret),
            )
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Token request failed: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Token request failed while reading the body: {}", e);
            AppError::from(e)
        })?;

        if !status.is_success() {
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected { status, body });
        }

        let payload: Value = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) => {
                error!("Token response was not JSON: {}", body);
                return Err(AppError::InvalidJson(body));
            }
        };

        let token_response = TokenResponse::from_payload(&payload);
        let token_type = token_response.token_type.clone();

        match token_response.into_access_token() {
            Some(token) => {
                debug!("Token obtained, type {:?}", token_type);
                Ok(token)
            }
            None => {
                let pretty = serde_json::to_string_pretty(&payload).unwrap_or(body);
                error!("No access_token in response:\n{}", pretty);
                Err(AppError::MissingField("access_token"))
            }
        }
    }
}
