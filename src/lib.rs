/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # mydex-client
//!
//! Client for the Mydex APIs. Every call follows the same two steps:
//!
//! 1. obtain an OAuth2 client-credentials token from the token endpoint,
//!    authenticating with HTTP Basic;
//! 2. send one bearer-authenticated request to a resource endpoint and
//!    return its body for rendering.
//!
//! Three endpoints are wrapped as services: the MRD country lookup, the PDX
//! add-measurements feature block and the PDX identify call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mydex_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::for_mrd())?;
//! let response = client.get_country("FR").await?;
//! println!("{}", response.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Values are read from the environment or a `.env` file: `MYDEX_CLIENT_ID`,
//! `MYDEX_CLIENT_SECRET`, `MYDEX_TOKEN_ENDPOINT`, `MYDEX_SCOPE`,
//! `MYDEX_MRD_BASE_URL`, `MYDEX_PDS_BASE_URL`, `MYDEX_TIMEOUT`,
//! `MYDEX_MEMBER_UID`, `MYDEX_MEMBER_KEY`, `MYDEX_CONNECTION_ID`,
//! `MYDEX_CONNECTION_NID` and `MYDEX_CONNECTION_TOKEN`. `LOGLEVEL` controls
//! logging.

/// Configuration, token fetching and the service client
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Token, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Payload models for the PDS feature blocks
pub mod presentation;
/// Environment, hashing and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
