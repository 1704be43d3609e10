//
//  graph-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The client does not acquire tokens. An OAuth 2.0 access token obtained
//! elsewhere (an app registration, `az account get-access-token`, Graph
//! Explorer) is supplied by the caller and attached to every request as a
//! bearer credential.
//!
//! ## Module Structure
//!
//! - [`AuthCredential`]: the credential attached to requests
//! - [`token`]: token lookup (flag, environment), validation, stdin input
//!
//! ## Example
//!
//! ```rust,no_run
//! use graph_client::api::GraphClient;
//! use graph_client::auth::AuthCredential;
//!
//! let client = GraphClient::graph()?
//!     .with_auth(AuthCredential::bearer("eyJ0eXAi..."));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod token;

pub use token::*;

use std::fmt;

use reqwest::RequestBuilder;

/// A bearer access token.
///
/// `Debug` output never includes the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCredential {
    token: String,
}

impl AuthCredential {
    /// Creates a bearer credential. A leading `Bearer ` prefix is stripped.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: normalize_token(&token.into()),
        }
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Applies the credential to a request as an `Authorization: Bearer` header.
    ///
    /// # Parameters
    ///
    /// * `request` - The request builder to authenticate
    ///
    /// # Returns
    ///
    /// The same builder with the header added.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}
