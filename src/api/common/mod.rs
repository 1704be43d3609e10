//
//  graph-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every layer of the API client:
//! the transport, the endpoint dispatcher and the resource segments.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Payload`] - The normalized body of a successful response
//! - [`Collection`] - The `value` / `@odata.nextLink` collection wrapper
//!
//! # Example
//!
//! ```rust
//! use graph_client::api::common::ApiError;
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::MissingParameter { name }) => println!("Supply {}", name),
//!         Err(ApiError::HttpStatus { status, .. }) => println!("Remote failure {}", status),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

mod pagination;
mod payload;

pub use pagination::*;
pub use payload::*;

use super::client::format_api_error;

/// Result alias used throughout the API layer.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Graph API operations.
///
/// Only two kinds come from the endpoint contract itself: a local
/// [`MissingParameter`](ApiError::MissingParameter) raised before any network
/// call, and a remote [`HttpStatus`](ApiError::HttpStatus) carrying the status
/// code and body verbatim. The remaining variants cover the plumbing around
/// them (network, JSON, URLs, registry lookups).
///
/// # Variants
///
/// | Variant | Raised by | Network call made |
/// |---------|-----------|-------------------|
/// | `MissingParameter` | Path rendering | No |
/// | `HttpStatus` | Response normalization | Yes |
/// | `Network` | Transport | Attempted |
/// | `Json` | Body encoding / decoding | Maybe |
/// | `InvalidUrl` | Client construction | No |
/// | `UnknownEndpoint` | Endpoint registry | No |
/// | `BodyMismatch` | Dispatcher | No |
/// | `InvalidQuery` | Query option parsing | No |
/// | `UnexpectedPayload` | Payload helpers | No |
///
/// # Notes
///
/// - Remote errors are never classified or retried at this layer
/// - The `Network` variant automatically converts from `reqwest::Error`
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required path parameter was absent or blank.
    ///
    /// Raised before any network call. `name` is the parameter as declared
    /// in the endpoint's path template (e.g. `user_id`).
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Name of the first missing parameter.
        name: String,
    },

    /// The remote API answered with a non-2xx status.
    ///
    /// The status code and the response body bytes are preserved verbatim.
    /// Use [`body_text`](ApiError::body_text) for a printable form.
    #[error("HTTP {status}: {}", format_api_error(&String::from_utf8_lossy(.body)))]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: Vec<u8>,
    },

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded or a response body decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No endpoint with this name exists in the registry.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// The supplied request body does not match the endpoint's body mode.
    #[error("Endpoint {endpoint} expects {expected}")]
    BodyMismatch {
        /// Qualified endpoint name.
        endpoint: String,
        /// Human readable description of the accepted body.
        expected: &'static str,
    },

    /// A query option could not be parsed from its textual form.
    #[error("Invalid value {value:?} for query option {name}")]
    InvalidQuery {
        /// The option name as given.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A payload helper was asked for a shape the payload does not have.
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

impl ApiError {
    /// Returns the remote HTTP status code, if this is a remote error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::common::ApiError;
    ///
    /// let err = ApiError::HttpStatus { status: 404, body: Vec::new() };
    /// assert_eq!(err.status(), Some(404));
    ///
    /// let err = ApiError::MissingParameter { name: "user_id".into() };
    /// assert_eq!(err.status(), None);
    /// ```
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the body of a remote error as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Self::HttpStatus { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }

    /// Returns `true` for errors raised locally before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::UnknownEndpoint(_)
                | Self::BodyMismatch { .. }
                | Self::InvalidQuery { .. }
                | Self::InvalidUrl(_)
        )
    }
}
