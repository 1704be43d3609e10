//
//  graph-client
//  api/registry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Name lookup over every segment's endpoint table.
//!
//! Endpoints are addressed as `segment.name` (`mail.get_message_count`).
//! A bare name is accepted when exactly one segment declares it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::common::{ApiError, ApiResult};
use super::endpoint::{Endpoint, Segment};
use super::segments::{calendar, mail, places};

static BY_NAME: Lazy<HashMap<String, &'static Endpoint>> = Lazy::new(|| {
    all().map(|endpoint| (endpoint.qualified_name(), endpoint)).collect()
});

/// Every endpoint, grouped by segment in [`Segment::ALL`] order.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    Segment::ALL.iter().flat_map(|segment| by_segment(*segment).iter())
}

pub fn by_segment(segment: Segment) -> &'static [Endpoint] {
    match segment {
        Segment::Places => places::ENDPOINTS,
        Segment::UserMail => mail::ENDPOINTS,
        Segment::UserCalendar => calendar::ENDPOINTS,
    }
}

/// Resolves `segment.name` or an unambiguous bare `name`.
///
/// # Errors
///
/// [`ApiError::UnknownEndpoint`] when nothing matches or a bare name is
/// declared by more than one segment.
pub fn find(name: &str) -> ApiResult<&'static Endpoint> {
    if let Some(endpoint) = BY_NAME.get(name) {
        return Ok(endpoint);
    }

    let mut matches = all().filter(|endpoint| endpoint.name == name);
    match (matches.next(), matches.next()) {
        (Some(endpoint), None) => Ok(endpoint),
        (Some(_), Some(_)) => Err(ApiError::UnknownEndpoint(format!(
            "{name} is ambiguous, qualify it with a segment"
        ))),
        _ => Err(ApiError::UnknownEndpoint(name.to_string())),
    }
}

pub fn len() -> usize {
    BY_NAME.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dispatch::dispatch;
    use crate::api::endpoint::{BodyMode, PathArgs};
    use crate::api::query::QueryOptions;
    use crate::api::request::{RequestBody, Verb};
    use crate::api::transport::testing::Recorder;

    #[test]
    fn test_find_qualified_and_bare() {
        let endpoint = find("mail.get_message_count").unwrap();
        assert_eq!(endpoint.path, "/users/{user_id}/messages/$count");

        let endpoint = find("list_rooms").unwrap();
        assert_eq!(endpoint.segment, Segment::Places);
        assert_eq!(endpoint.verb, Verb::Get);
    }

    #[test]
    fn test_find_unknown() {
        assert!(matches!(find("mail.nope"), Err(ApiError::UnknownEndpoint(_))));
        assert!(matches!(find("places.get_message"), Err(ApiError::UnknownEndpoint(_))));
    }

    #[test]
    fn test_index_covers_every_table() {
        let total: usize = Segment::ALL.iter().map(|s| by_segment(*s).len()).sum();
        assert_eq!(len(), total);
        assert_eq!(total, 142);
        assert_eq!(all().count(), total);
    }

    /// A body every endpoint of this mode accepts.
    fn body_for(endpoint: &Endpoint) -> RequestBody {
        match endpoint.body {
            BodyMode::None => RequestBody::Empty,
            BodyMode::Json => RequestBody::Json(serde_json::json!({})),
            BodyMode::Bytes => RequestBody::octet_stream(b"data".to_vec()),
        }
    }

    #[tokio::test]
    async fn test_every_blank_identifier_fails_before_any_call() {
        for endpoint in all() {
            let names = endpoint.path_params();
            for blank in &names {
                let mut args = PathArgs::new();
                for name in &names {
                    args.insert(name, if name == blank { " " } else { "id-1" });
                }

                let recorder = Recorder::new();
                let err = dispatch(&recorder, endpoint, &args, &QueryOptions::new(), body_for(endpoint))
                    .await
                    .unwrap_err();
                match err {
                    ApiError::MissingParameter { name } => {
                        assert_eq!(name, *blank, "{}", endpoint.qualified_name())
                    }
                    other => panic!("{}: unexpected {other:?}", endpoint.qualified_name()),
                }
                assert_eq!(recorder.calls(), 0, "{}", endpoint.qualified_name());
            }
        }
    }

    #[tokio::test]
    async fn test_every_complete_call_sends_one_request() {
        for endpoint in all() {
            let names = endpoint.path_params();
            let values: Vec<String> = (0..names.len()).map(|i| format!("id-{i}")).collect();
            let mut args = PathArgs::new();
            for (name, value) in names.iter().zip(&values) {
                args.insert(name, value);
            }

            let recorder = Recorder::new();
            dispatch(&recorder, endpoint, &args, &QueryOptions::new(), body_for(endpoint))
                .await
                .unwrap();

            let request = recorder.last();
            assert_eq!(recorder.calls(), 1, "{}", endpoint.qualified_name());
            assert_eq!(request.method, endpoint.verb, "{}", endpoint.qualified_name());
            assert!(request.query.is_empty(), "{}", endpoint.qualified_name());
            assert!(!request.path.contains('{'), "{}", endpoint.qualified_name());
            for value in &values {
                assert!(request.path.contains(value.as_str()), "{}", endpoint.qualified_name());
            }
        }
    }
}
