//
//  graph-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! A binding for the Graph REST surface covering places (rooms and room
//! lists), user mail and user calendars.
//!
//! ## Architecture
//!
//! - [`endpoint`]: static endpoint descriptors (verb, path template, accepted
//!   query options, body mode, response shape)
//! - [`segments`]: descriptor tables plus one typed method per endpoint
//! - [`dispatch`](mod@dispatch): descriptor + arguments to [`Request`] to [`Payload`]
//! - [`transport`]: the [`Transport`] seam and response normalization
//! - [`client`]: [`GraphClient`], the `reqwest` transport
//! - [`registry`]: lookup by endpoint name
//! - [`models`]: typed request and response records
//! - [`common`]: errors, payloads and collection wrappers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use graph_client::api::{GraphClient, QueryOptions};
//! use graph_client::auth::AuthCredential;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GraphClient::graph()?.with_auth(AuthCredential::bearer("eyJ0eXAi..."));
//!
//! let unread = client
//!     .user_mail()
//!     .get_message_count("me@contoso.com", &QueryOptions::new().filter("isRead eq false"))
//!     .await?
//!     .count()?;
//! println!("{unread} unread");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses surface as [`ApiError::HttpStatus`] carrying the status
//! and the raw body. A missing path identifier fails with
//! [`ApiError::MissingParameter`] before any request is sent.

pub mod client;
pub mod common;
pub mod dispatch;
pub mod endpoint;
pub mod models;
pub mod query;
pub mod registry;
pub mod request;
pub mod segments;
pub mod transport;

pub use client::{GraphClient, DEFAULT_BASE_URL};
pub use common::{ApiError, ApiResult, Collection, Payload};
pub use dispatch::{build_request, dispatch};
pub use endpoint::{BodyMode, Endpoint, PathArgs, ResponseShape, Segment};
pub use query::{QueryOptions, QueryParam};
pub use request::{QueryValue, Request, RequestBody, Verb};
pub use transport::{RawResponse, Transport};
