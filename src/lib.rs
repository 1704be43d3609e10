//
//  graph-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Graph Client Library
//!
//! A typed binding for the Graph REST surface covering places (rooms and
//! room lists), user mail and user calendars, plus the `graph` command-line
//! tool built on it.
//!
//! ## Overview
//!
//! Every endpoint is a constant descriptor (verb, path template, accepted
//! query options, body mode, response shape). One generic dispatcher turns a
//! descriptor and its arguments into a request and hands it to a
//! [`Transport`](api::Transport). Per-segment facades
//! ([`Places`](api::segments::places::Places),
//! [`UserMail`](api::segments::mail::UserMail),
//! [`UserCalendar`](api::segments::calendar::UserCalendar)) give each
//! endpoint a named method.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, descriptors, dispatch, segments and records
//! - [`auth`]: Bearer credentials
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (JSON, YAML, table)
//! - [`cli`]: Command-line interface definitions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use graph_client::api::{GraphClient, QueryOptions};
//! use graph_client::auth::AuthCredential;
//!
//! # async fn example() -> graph_client::api::ApiResult<()> {
//! let client = GraphClient::graph()?.with_auth(AuthCredential::bearer("token"));
//!
//! let unread = client
//!     .user_mail()
//!     .get_message_count("adele@contoso.com", &QueryOptions::new().filter("isRead eq false"))
//!     .await?
//!     .count()?;
//! println!("{unread} unread");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Graph API client: transport, endpoint tables and typed records.
pub mod api;

/// Bearer token credentials.
pub mod auth;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/graph/config.toml`
/// - macOS: `~/Library/Application Support/graph/config.toml`
/// - Windows: `%APPDATA%\graph\config.toml`
pub mod config;

/// Output formatting for JSON, YAML and table modes.
pub mod output;

/// Re-export of the main CLI struct.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Name of the CLI binary.
pub const APP_NAME: &str = "graph";

/// Crate version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including a missing path parameter.
    pub const USAGE: i32 = 2;

    /// The service answered 401 or 403.
    pub const AUTH_ERROR: i32 = 4;

    /// The service answered 404.
    pub const NOT_FOUND: i32 = 8;

    /// The service answered 429.
    pub const RATE_LIMIT: i32 = 32;

    /// The service answered with a 5xx status.
    pub const SERVER_ERROR: i32 = 64;

    /// Maps a command failure to its exit code.
    ///
    /// Errors that are not an [`ApiError`] are general errors.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        let Some(api) = err.downcast_ref::<ApiError>() else {
            return ERROR;
        };
        match api {
            ApiError::MissingParameter { .. }
            | ApiError::UnknownEndpoint(_)
            | ApiError::InvalidQuery { .. }
            | ApiError::BodyMismatch { .. } => USAGE,
            _ => match api.status() {
                Some(401 | 403) => AUTH_ERROR,
                Some(404) => NOT_FOUND,
                Some(429) => RATE_LIMIT,
                Some(status) if status >= 500 => SERVER_ERROR,
                _ => ERROR,
            },
        }
    }

}
