/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// User agent string sent with every request to the Mydex endpoints
pub const USER_AGENT: &str = "mydex-client/0.1.0";
/// Default timeout in seconds applied to each HTTP call
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// OAuth2 grant type used for every token request
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Sandbox OAuth2 token endpoint used by the PDX APIs
pub const PDX_TOKEN_ENDPOINT: &str = "https://sbx-op.mydexid.org/oauth2/token";
/// Production OAuth2 token endpoint used by the MRD API
pub const MRD_TOKEN_ENDPOINT: &str = "https://op.mydexid.org/oauth2/token";
/// Sandbox base URL of the personal data store API
pub const PDS_BASE_URL: &str = "https://sbx-api.mydex.org";
/// Base URL of the master reference data API
pub const MRD_BASE_URL: &str = "https://api-mrd.mydex.org";

/// Scope required by the country lookup
pub const COUNTRIES_SCOPE: &str = "countries";
/// Scope required by the identify endpoint
pub const PDX_SCOPE: &str = "mydex:pdx";
/// Scope required by the add-measurements endpoint
pub const ADD_MEASUREMENTS_SCOPE: &str = "mydex:pdx post:/api/pds/add-measurements";

/// Header carrying the scope hint on MRD requests
pub const MRD_SCOPES_HEADER: &str = "X-Mrd-Scopes";
/// Header carrying the member key on PDS feature-block requests
pub const CONNECTION_TOKEN_HEADER: &str = "Connection-Token";

/// Path of the country lookup, relative to the MRD base URL
pub const COUNTRIES_PATH: &str = "countries";
/// Path of the add-measurements feature block, relative to the PDS base URL
pub const ADD_MEASUREMENTS_PATH: &str = "api/pds/add-measurements";
/// Path of the identify endpoint, relative to the PDS base URL
pub const IDENTIFY_PATH: &str = "identify";
/// Default `return_to` target for identify requests
pub const DEFAULT_RETURN_TO: &str = "https://example.com";
