/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::countries::CountryService;
use crate::application::interfaces::identify::IdentifyService;
use crate::application::interfaces::measurements::MeasurementService;
use crate::constants::{
    ADD_MEASUREMENTS_PATH, CONNECTION_TOKEN_HEADER, COUNTRIES_PATH, IDENTIFY_PATH,
    MRD_SCOPES_HEADER, USER_AGENT,
};
use crate::error::AppError;
use crate::model::auth::AccessToken;
use crate::model::http::HttpClient;
use crate::model::requests::{IdentifyRequest, ResourceRequest, join_url};
use crate::model::responses::ResourceResponse;
use crate::presentation::measurement::MeasurementRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Mydex APIs
///
/// Each call runs the two-step pipeline: fetch a token, then call the
/// resource with it. A failed token request stops the pipeline before any
/// resource request is sent.
pub struct Client {
    config: Arc<Config>,
    auth: Auth,
    http_client: HttpClient,
}

impl Client {
    /// Creates a new client
    ///
    /// Token and resource requests share one reqwest client configured with
    /// the timeout from `config.rest_api`.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;

        Ok(Self {
            auth: Auth::with_client(config.clone(), inner.clone()),
            http_client: HttpClient::from_client(inner),
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Requests a fresh access token
    pub async fn fetch_token(&self) -> Result<AccessToken, AppError> {
        self.auth.fetch_token().await
    }

    /// Sends one resource request with an existing token
    pub async fn call_resource(
        &self,
        token: &AccessToken,
        request: &ResourceRequest,
    ) -> Result<ResourceResponse, AppError> {
        self.http_client.call(token, request).await
    }

    /// Fetches a token, then sends `request` with it
    pub async fn execute(&self, request: ResourceRequest) -> Result<ResourceResponse, AppError> {
        let token = self.fetch_token().await?;
        self.call_resource(&token, &request).await
    }
}

#[async_trait]
impl CountryService for Client {
    async fn get_country(&self, country_code: &str) -> Result<ResourceResponse, AppError> {
        info!("Getting country: {}", country_code);
        let url = join_url(&self.config.rest_api.mrd_base_url, COUNTRIES_PATH);
        let request = ResourceRequest::get(&url)?
            .with_path_segment(country_code)?
            .with_header(MRD_SCOPES_HEADER, &self.config.oauth.scope)?;

        let response = self.execute(request).await?;
        debug!("Country data obtained for: {}", country_code);
        Ok(response)
    }
}

#[async_trait]
impl MeasurementService for Client {
    async fn add_measurements(
        &self,
        records: &[MeasurementRecord],
    ) -> Result<ResourceResponse, AppError> {
        let member = &self.config.member;
        info!(
            "Adding {} measurement(s) for member {}",
            records.len(),
            member.uid
        );

        let url = join_url(&self.config.rest_api.pds_base_url, ADD_MEASUREMENTS_PATH);
        let request = ResourceRequest::post(&url)?
            .with_query("uid", member.uid.as_str())
            .with_query("con_id", member.connection_id.as_str())
            .with_secret_header(CONNECTION_TOKEN_HEADER, &member.key)?
            .with_json(records)?;

        self.execute(request).await
    }
}

#[async_trait]
impl IdentifyService for Client {
    async fn identify(&self, request: &IdentifyRequest) -> Result<ResourceResponse, AppError> {
        info!("Requesting identify URL for connection {}", request.connection_nid);
        let url = join_url(&self.config.rest_api.pds_base_url, IDENTIFY_PATH);
        let request = ResourceRequest::post(&url)?.with_json(request)?;

        self.execute(request).await
    }
}
