/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the client, its configuration, the service traits and the payload
//! types into scope with a single import.
//!
//! ```rust
//! use mydex_client::prelude::*;
//!
//! let request = IdentifyRequest::new("45678", "token", "https://example.com");
//! assert_eq!(request.connection_token_hash.len(), 128);
//! ```

/// Configuration types
pub use crate::application::config::{Config, Credentials, MemberConfig, OAuthConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Error handling
pub use crate::error::{AppError, ErrorKind};

/// Token fetching
pub use crate::application::auth::{Auth, basic_auth_header};

/// Client running the token-then-resource pipeline
pub use crate::application::client::Client;

/// Service interfaces
pub use crate::application::interfaces::countries::CountryService;
pub use crate::application::interfaces::identify::IdentifyService;
pub use crate::application::interfaces::measurements::MeasurementService;

/// Models
pub use crate::model::auth::{AccessToken, TokenResponse};
pub use crate::model::http::HttpClient;
pub use crate::model::requests::{IdentifyRequest, ResourceRequest};
pub use crate::model::responses::{ResourceResponse, ResponseBody};
pub use crate::presentation::measurement::MeasurementRecord;

/// Utilities
pub use crate::utils::hashing::connection_token_hash;
pub use crate::utils::logger::setup_logger;
