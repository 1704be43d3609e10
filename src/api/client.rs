//
//  graph-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Graph API
//!
//! [`GraphClient`] is the production [`Transport`]: it owns a `reqwest`
//! session, the base URL and an optional bearer credential.
//!
//! ## Features
//!
//! - Base URL validation with `url`
//! - Bearer authentication header injection
//! - Query serialization (list values comma-joined)
//! - JSON and raw byte request bodies
//! - Custom User-Agent header and configurable timeout
//!
//! The client interprets nothing about the response; status handling and
//! decoding happen in [`Transport::normalize`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::common::ApiResult;
use super::request::{Request, RequestBody};
use super::segments::{Places, UserCalendar, UserMail};
use super::transport::{RawResponse, Transport};
use crate::auth::AuthCredential;
use crate::config::ApiConfig;

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Extracts a user-friendly message from a Graph error body.
///
/// Graph returns errors in the format:
/// ```json
/// {"error": {"code": "ErrorItemNotFound", "message": "Human readable message"}}
/// ```
///
/// # Parameters
///
/// * `body` - The raw error response body
///
/// # Returns
///
/// `"code: message"` when the body follows the Graph format, the bare
/// message for `{"message": ...}` bodies, and the trimmed raw body otherwise.
pub fn format_api_error(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = json.get("error") {
            let code = error.get("code").and_then(|c| c.as_str());
            let message = error.get("message").and_then(|m| m.as_str());
            match (code, message) {
                (Some(code), Some(message)) => return format!("{}: {}", code, message),
                (None, Some(message)) => return message.to_string(),
                (Some(code), None) => return code.to_string(),
                (None, None) => {}
            }
        }

        // OAuth endpoints: {"error_description": "..."}
        if let Some(description) = json.get("error_description").and_then(|m| m.as_str()) {
            return description.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        "(empty response body)".to_string()
    } else {
        body.to_string()
    }
}

/// The reqwest-backed Graph transport.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use graph_client::api::GraphClient;
/// use graph_client::auth::AuthCredential;
///
/// // Against the public v1.0 service root
/// let client = GraphClient::graph()?.with_auth(AuthCredential::bearer("token"));
///
/// // Against another root (beta, national clouds, a local mock)
/// let beta = GraphClient::new("https://graph.microsoft.com/beta")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Calling Endpoints
///
/// ```rust,no_run
/// use graph_client::api::{GraphClient, QueryOptions};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let unread = client
///     .user_mail()
///     .get_message_count("adele@contoso.com", &QueryOptions::new().filter("isRead eq false"))
///     .await?;
/// println!("{} unread", unread.count()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphClient {
    /// The underlying HTTP client
    http: Client,
    /// Service root, without a trailing slash
    base_url: String,
    /// Optional bearer credential
    auth: Option<AuthCredential>,
}

impl GraphClient {
    /// Creates a client for the public Graph v1.0 endpoint.
    pub fn graph() -> ApiResult<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Creates a client for an arbitrary service root.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`](super::ApiError::InvalidUrl) when
    /// `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::build(base_url, None)
    }

    /// Creates a client from the `[api]` section of the configuration.
    ///
    /// # Parameters
    ///
    /// * `config` - Base URL (defaults to [`DEFAULT_BASE_URL`]) and timeout
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Self::build(base_url, timeout)
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        Url::parse(base_url)?;

        let mut builder = Client::builder().user_agent(format!("graph/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: None,
        })
    }

    /// Sets the credential attached to every request.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the service root this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a request path against the base URL.
    ///
    /// Absolute URLs (such as `@odata.nextLink` values) are used as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::GraphClient;
    ///
    /// let client = GraphClient::new("https://graph.microsoft.com/v1.0/").unwrap();
    /// assert_eq!(client.url_for("/places/p1"), "https://graph.microsoft.com/v1.0/places/p1");
    /// assert_eq!(client.url_for("me"), "https://graph.microsoft.com/v1.0/me");
    /// assert_eq!(client.url_for("https://example.com/next"), "https://example.com/next");
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Endpoints under `/places`.
    pub fn places(&self) -> Places<'_> {
        Places::new(self)
    }

    /// Mail endpoints under `/users/{user_id}`.
    pub fn user_mail(&self) -> UserMail<'_> {
        UserMail::new(self)
    }

    /// Calendar endpoints under `/users/{user_id}`.
    pub fn user_calendar(&self) -> UserCalendar<'_> {
        UserCalendar::new(self)
    }
}

#[async_trait]
impl Transport for GraphClient {
    async fn execute(&self, request: Request) -> ApiResult<RawResponse> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self.http.request(request.method.into(), &url);

        if !request.query.is_empty() {
            let pairs: Vec<(&str, String)> = request
                .query
                .iter()
                .map(|(key, value)| (key.as_str(), value.to_wire()))
                .collect();
            builder = builder.query(&pairs);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Bytes { data, content_type } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
        };

        if let Some(auth) = &self.auth {
            builder = auth.apply_to_request(builder);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_error_graph_shape() {
        let body = r#"{"error":{"code":"InvalidAuthenticationToken","message":"Access token is empty."}}"#;
        assert_eq!(
            format_api_error(body),
            "InvalidAuthenticationToken: Access token is empty."
        );
    }

    #[test]
    fn test_format_api_error_fallbacks() {
        assert_eq!(format_api_error(r#"{"message":"nope"}"#), "nope");
        assert_eq!(
            format_api_error(r#"{"error":"invalid_grant","error_description":"expired"}"#),
            "expired"
        );
        assert_eq!(format_api_error(" Service Unavailable \n"), "Service Unavailable");
        assert_eq!(format_api_error(""), "(empty response body)");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(GraphClient::new("not a url").is_err());
    }

    #[test]
    fn test_from_config_defaults_to_graph() {
        let client = GraphClient::from_config(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GraphClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url_for("/users/u1/messages/$count"),
            "http://localhost:8080/users/u1/messages/$count"
        );
    }
}
