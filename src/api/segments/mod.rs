//
//  graph-client
//  api/segments/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Segments
//!
//! One type per resource family. A segment borrows a [`Transport`] and
//! exposes one method per endpoint; every method is a one-line delegation
//! to [`dispatch`] with the endpoint's `const` descriptor.
//!
//! | Segment | Module | Root |
//! |---------|--------|------|
//! | [`Places`] | [`places`] | `/places` |
//! | [`UserMail`] | [`mail`] | `/users/{user_id}` |
//! | [`UserCalendar`] | [`calendar`] | `/users/{user_id}` |
//!
//! Each module also exports its descriptors and an `ENDPOINTS` table, which
//! the [registry](super::registry) indexes.
//!
//! Segments hold no state between calls and never call each other.

use serde::Serialize;

use super::common::{ApiResult, Payload};
use super::dispatch::dispatch;
use super::endpoint::{Endpoint, PathArgs};
use super::query::QueryOptions;
use super::request::RequestBody;
use super::transport::Transport;

/// Declares endpoint constants plus an `ENDPOINTS` table listing them in
/// declaration order.
macro_rules! endpoint_table {
    ($( $(#[$meta:meta])* $id:ident = $endpoint:expr; )*) => {
        $(
            $(#[$meta])*
            pub const $id: Endpoint = $endpoint;
        )*

        /// Every endpoint declared in this module, in declaration order.
        pub static ENDPOINTS: &[Endpoint] = &[$($id),*];
    };
}

pub mod calendar;
pub mod mail;
pub mod places;

pub use calendar::UserCalendar;
pub use mail::UserMail;
pub use places::Places;

/// GET-style call: path ids plus query options.
async fn read(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    ids: &[&str],
    query: &QueryOptions,
) -> ApiResult<Payload> {
    let args = PathArgs::positional(endpoint, ids);
    dispatch(transport, endpoint, &args, query, RequestBody::Empty).await
}

/// JSON write: path ids plus a typed body.
async fn write<B: Serialize + Sync + ?Sized>(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    ids: &[&str],
    body: &B,
) -> ApiResult<Payload> {
    let args = PathArgs::positional(endpoint, ids);
    let body = RequestBody::json(body)?;
    dispatch(transport, endpoint, &args, &QueryOptions::default(), body).await
}

/// Body-less call (DELETE, parameterless actions).
async fn action(transport: &dyn Transport, endpoint: &Endpoint, ids: &[&str]) -> ApiResult<Payload> {
    read(transport, endpoint, ids, &QueryOptions::default()).await
}

/// Raw content upload (`$value` PUT).
async fn upload(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    ids: &[&str],
    data: Vec<u8>,
) -> ApiResult<Payload> {
    let args = PathArgs::positional(endpoint, ids);
    dispatch(
        transport,
        endpoint,
        &args,
        &QueryOptions::default(),
        RequestBody::octet_stream(data),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all() -> impl Iterator<Item = &'static Endpoint> {
        places::ENDPOINTS
            .iter()
            .chain(mail::ENDPOINTS)
            .chain(calendar::ENDPOINTS)
    }

    #[test]
    fn test_names_unique_per_segment() {
        let mut seen = HashSet::new();
        for endpoint in all() {
            assert!(
                seen.insert(endpoint.qualified_name()),
                "duplicate endpoint {}",
                endpoint.qualified_name()
            );
        }
    }

    #[test]
    fn test_paths_are_rooted_and_balanced() {
        for endpoint in all() {
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.name);
            assert_eq!(
                endpoint.path.matches('{').count(),
                endpoint.path.matches('}').count(),
                "{}",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_user_endpoints_start_with_user_id() {
        for endpoint in mail::ENDPOINTS.iter().chain(calendar::ENDPOINTS) {
            assert_eq!(
                endpoint.path_params().first().copied(),
                Some("user_id"),
                "{}",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_every_endpoint_has_a_summary() {
        for endpoint in all() {
            assert!(!endpoint.summary.is_empty(), "{}", endpoint.qualified_name());
        }
    }

    #[test]
    fn test_count_endpoints_end_with_count_segment() {
        use crate::api::endpoint::ResponseShape;
        for endpoint in all().filter(|e| e.response == ResponseShape::Count) {
            assert!(endpoint.path.ends_with("/$count"), "{}", endpoint.name);
        }
    }
}
