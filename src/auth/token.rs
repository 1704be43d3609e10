//
//  graph-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Access Token Handling
//!
//! Tokens are looked up in this order:
//!
//! 1. An explicit value (the `--token` flag, which clap also fills from
//!    `GRAPH_TOKEN`)
//! 2. The environment variable named by `api.token_env` in the config file
//!
//! ## Example
//!
//! ```rust,no_run
//! use graph_client::auth::{read_token_from_stdin, validate_token};
//!
//! fn prompt() -> anyhow::Result<String> {
//!     println!("Paste an access token:");
//!     let token = read_token_from_stdin()?;
//!     if !validate_token(&token) {
//!         anyhow::bail!("Invalid token format");
//!     }
//!     Ok(token)
//! }
//! ```

use anyhow::Result;
use tracing::debug;

/// Reads a single line token from standard input.
///
/// Surrounding whitespace is trimmed.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Performs basic format validation on a token.
///
/// A token must be non-empty and contain no whitespace. Nothing else is
/// checked; the API is the judge of validity.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Trims whitespace and a leading `Bearer ` scheme from a pasted token.
pub fn normalize_token(token: &str) -> String {
    let token = token.trim();
    token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token)
        .trim()
        .to_string()
}

/// Resolves the access token to use.
///
/// # Parameters
///
/// * `explicit` - A token given directly (flag or `GRAPH_TOKEN`)
/// * `token_env` - Name of a fallback environment variable, if configured
///
/// # Returns
///
/// The first non-blank token found, normalized.
pub fn resolve_token(explicit: Option<&str>, token_env: Option<&str>) -> Option<String> {
    if let Some(token) = explicit.map(normalize_token).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    let name = token_env?;
    let token = std::env::var(name).ok().map(|t| normalize_token(&t));
    match token {
        Some(token) if !token.is_empty() => {
            debug!(variable = name, "using token from environment");
            Some(token)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("eyJ0eXAiOiJKV1QiLCJhbGciOi"));
        assert!(!validate_token(""));
        assert!(!validate_token("two words"));
    }

    #[test]
    fn test_resolve_prefers_explicit_token() {
        assert_eq!(
            resolve_token(Some(" abc "), Some("GRAPH_CLIENT_TEST_UNSET_VAR")),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_resolve_falls_back_to_environment() {
        std::env::set_var("GRAPH_CLIENT_TEST_TOKEN_VAR", "Bearer from-env");
        assert_eq!(
            resolve_token(Some("  "), Some("GRAPH_CLIENT_TEST_TOKEN_VAR")),
            Some("from-env".to_string())
        );
        std::env::remove_var("GRAPH_CLIENT_TEST_TOKEN_VAR");
    }

    #[test]
    fn test_resolve_none_when_nothing_configured() {
        assert_eq!(resolve_token(None, None), None);
        assert_eq!(resolve_token(None, Some("GRAPH_CLIENT_TEST_UNSET_VAR")), None);
    }
}
