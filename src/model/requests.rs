/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::utils::hashing::connection_token_hash;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Joins a base URL and a relative path with exactly one `/` between them
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A single authenticated call against a resource endpoint
///
/// Built with [`ResourceRequest::get`] or [`ResourceRequest::post`] and the
/// `with_*` methods. Invalid URLs, headers or bodies are rejected while
/// building, so nothing reaches the network for them.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    method: Method,
    url: Url,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<Value>,
}

impl ResourceRequest {
    /// Creates a request with an arbitrary method
    pub fn new(method: Method, url: &str) -> Result<Self, AppError> {
        let url = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            method,
            url,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Creates a GET request
    pub fn get(url: &str) -> Result<Self, AppError> {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request
    pub fn post(url: &str) -> Result<Self, AppError> {
        Self::new(Method::POST, url)
    }

    /// Appends `segment` to the URL path as a single percent-encoded segment
    ///
    /// Characters such as `/`, `?` and `#` are escaped, so the segment can
    /// neither add a query string nor walk to another path. Empty, `.` and
    /// `..` segments are rejected.
    pub fn with_path_segment(mut self, segment: &str) -> Result<Self, AppError> {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(AppError::InvalidUrl(format!(
                "invalid path segment {segment:?}"
            )));
        }
        let base = self.url.to_string();
        self.url
            .path_segments_mut()
            .map_err(|()| AppError::InvalidUrl(format!("{base} cannot take path segments")))?
            .pop_if_empty()
            .push(segment);
        Ok(self)
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds an extra header, replacing any previous value for the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Like [`Self::with_header`], but the value is masked in `Debug` output
    pub fn with_secret_header(self, name: &str, value: &str) -> Result<Self, AppError> {
        let mut request = self.with_header(name, value)?;
        if let Some(value) = request.headers.get_mut(name) {
            value.set_sensitive(true);
        }
        Ok(request)
    }

    /// Sets the JSON body
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL, without the query parameters added by [`Self::with_query`]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Query parameters in insertion order
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers sent next to `Authorization`
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// JSON body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Body of the identify call
///
/// The connection token itself is never sent, only its SHA-512 hex digest.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentifyRequest {
    /// Connection nid issued for this data connection
    pub connection_nid: String,
    /// SHA-512 hex digest of the connection token
    pub connection_token_hash: String,
    /// Where the member is sent back once identified
    pub return_to: String,
    /// Opaque value echoed back in the callback, to link the member to a
    /// record in the caller's backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linking_token: Option<String>,
}

impl IdentifyRequest {
    /// Builds the request, hashing `connection_token`
    pub fn new(
        connection_nid: impl Into<String>,
        connection_token: &str,
        return_to: impl Into<String>,
    ) -> Self {
        Self {
            connection_nid: connection_nid.into(),
            connection_token_hash: connection_token_hash(connection_token),
            return_to: return_to.into(),
            linking_token: None,
        }
    }

    /// Sets the linking token
    #[must_use]
    pub fn with_linking_token(mut self, linking_token: impl Into<String>) -> Self {
        self.linking_token = Some(linking_token.into());
        self
    }
}
