/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::auth::AccessToken;
use crate::model::requests::ResourceRequest;
use crate::model::responses::ResourceResponse;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{debug, error};

/// Sends bearer-authenticated requests to resource endpoints
///
/// One call is one attempt: there is no retry and no token refresh.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Wraps an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `request` with `Authorization: Bearer <token>`
    ///
    /// # Returns
    /// * `Ok(ResourceResponse)` - 2xx response, body parsed as JSON when possible
    /// * `Err(AppError)` - Transport failure or non-2xx status
    pub async fn call(
        &self,
        token: &AccessToken,
        request: &ResourceRequest,
    ) -> Result<ResourceResponse, AppError> {
        debug!("{} {}", request.method(), request.url());

        let mut authorization = HeaderValue::from_str(&token.bearer_header())
            .map_err(|e| AppError::InvalidHeader(format!("{AUTHORIZATION}: {e}")))?;
        authorization.set_sensitive(true);

        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone())
            .header(AUTHORIZATION, authorization)
            .headers(request.headers().clone());

        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request to {} failed: {}", request.url(), e);
            AppError::from(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);
        let body = response.text().await.map_err(|e| {
            error!("Reading response from {} failed: {}", request.url(), e);
            AppError::from(e)
        })?;

        if !status.is_success() {
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected { status, body });
        }

        Ok(ResourceResponse::from_body(status, body))
    }
}
