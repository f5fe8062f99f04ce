/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful resource response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON
    Json(Value),
    /// The body was not JSON and is kept verbatim
    Text(String),
}

/// Successful (2xx) response from a resource endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    /// Status returned by the server
    pub status: StatusCode,
    /// Parsed or raw body
    pub body: ResponseBody,
}

impl ResourceResponse {
    /// Wraps a raw body, parsing it as JSON when possible
    #[must_use]
    pub fn from_body(status: StatusCode, body: String) -> Self {
        let body = match serde_json::from_str::<Value>(&body) {
            Ok(json) => ResponseBody::Json(json),
            Err(_) => ResponseBody::Text(body),
        };
        Self { status, body }
    }

    /// Returns the JSON body, if the response had one
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(json) => Some(json),
            ResponseBody::Text(_) => None,
        }
    }

    /// Deserializes the JSON body into `T`
    ///
    /// A text body yields [`AppError::InvalidJson`].
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, AppError> {
        match self.body {
            ResponseBody::Json(json) => Ok(serde_json::from_value(json)?),
            ResponseBody::Text(text) => Err(AppError::InvalidJson(text)),
        }
    }

    /// Renders the body for display
    ///
    /// JSON is pretty-printed with two-space indentation and non-ASCII
    /// characters kept as is; text bodies are returned unchanged.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.body {
            ResponseBody::Json(json) => {
                serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
        }
    }
}
