//
//  graph-client
//  api/dispatch.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Generic endpoint execution.
//!
//! [`build_request`] turns a descriptor plus call arguments into a
//! [`Request`]; [`dispatch`] sends it through a [`Transport`]. All validation
//! happens in `build_request`, so a failed precondition never reaches the
//! network.

use tracing::debug;

use super::common::{ApiError, ApiResult, Payload};
use super::endpoint::{BodyMode, Endpoint, PathArgs};
use super::query::QueryOptions;
use super::request::{Request, RequestBody};
use super::transport::Transport;

/// Realizes one call of `endpoint`.
///
/// # Processing
///
/// 1. Render the path (fails with `MissingParameter` on the first absent id)
/// 2. Keep the supplied query options the endpoint accepts, in its order;
///    others are dropped with a debug log
/// 3. Check the body against the endpoint's body mode. A JSON endpoint
///    called without a body sends `{}`
///
/// # Errors
///
/// - [`ApiError::MissingParameter`]
/// - [`ApiError::BodyMismatch`]
pub fn build_request(
    endpoint: &Endpoint,
    args: &PathArgs<'_>,
    query: &QueryOptions,
    body: RequestBody,
) -> ApiResult<Request> {
    let path = endpoint.render_path(args)?;

    let dropped: Vec<_> = query
        .supplied()
        .into_iter()
        .filter(|param| !endpoint.accepts(*param))
        .collect();
    if !dropped.is_empty() {
        debug!(
            endpoint = %endpoint.qualified_name(),
            ?dropped,
            "ignoring query options the endpoint does not accept"
        );
    }

    let body = match (endpoint.body, body) {
        (BodyMode::None, RequestBody::Empty) => RequestBody::Empty,
        (BodyMode::Json, RequestBody::Empty) => RequestBody::Json(serde_json::json!({})),
        (BodyMode::Json, body @ RequestBody::Json(_)) => body,
        (BodyMode::Bytes, body @ RequestBody::Bytes { .. }) => body,
        (mode, _) => {
            return Err(ApiError::BodyMismatch {
                endpoint: endpoint.qualified_name(),
                expected: mode.describe(),
            })
        }
    };

    Ok(Request {
        method: endpoint.verb,
        path,
        query: query.pairs_for(endpoint.query),
        body,
    })
}

/// Executes one call of `endpoint` through `transport`.
///
/// The payload is returned exactly as the transport normalized it, and
/// failures propagate unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use graph_client::api::{dispatch, GraphClient, PathArgs, QueryOptions, RequestBody};
/// use graph_client::api::segments::places;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let rooms = dispatch(
///     &client,
///     &places::LIST_ROOMS,
///     &PathArgs::new(),
///     &QueryOptions::new().top(5),
///     RequestBody::Empty,
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn dispatch(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    args: &PathArgs<'_>,
    query: &QueryOptions,
    body: RequestBody,
) -> ApiResult<Payload> {
    let request = build_request(endpoint, args, query, body)?;
    debug!(
        endpoint = %endpoint.qualified_name(),
        method = %request.method,
        path = %request.path,
        "dispatching endpoint"
    );
    transport.send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::{ResponseShape, Segment};
    use crate::api::query;
    use crate::api::request::Verb;
    use crate::api::transport::testing::Recorder;
    use crate::api::transport::RawResponse;
    use serde_json::json;

    const UPDATE_PLACE: Endpoint =
        Endpoint::patch(Segment::Places, "update_place", "/places/{place_id}");
    const PUT_CONTENT: Endpoint = Endpoint::put(
        Segment::UserMail,
        "update_message_content",
        "/users/{user_id}/messages/{message_id}/$value",
    );
    const COUNT: Endpoint = Endpoint::get(
        Segment::UserMail,
        "get_message_count",
        "/users/{user_id}/messages/$count",
    )
    .query(query::COUNT)
    .returns(ResponseShape::Count);

    #[test]
    fn test_json_endpoint_without_body_sends_empty_object() {
        let args = PathArgs::new().with("place_id", "p1");
        let request =
            build_request(&UPDATE_PLACE, &args, &QueryOptions::new(), RequestBody::Empty).unwrap();
        assert_eq!(request.method, Verb::Patch);
        assert_eq!(request.body, RequestBody::Json(json!({})));
    }

    #[test]
    fn test_body_mode_mismatch_is_rejected() {
        let args = PathArgs::new().with("user_id", "u1").with("message_id", "m1");
        let err = build_request(
            &PUT_CONTENT,
            &args,
            &QueryOptions::new(),
            RequestBody::Json(json!({"a": 1})),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::BodyMismatch { .. }));

        let err = build_request(&PUT_CONTENT, &args, &QueryOptions::new(), RequestBody::Empty)
            .unwrap_err();
        assert!(matches!(err, ApiError::BodyMismatch { .. }));
    }

    #[test]
    fn test_count_query_keeps_only_accepted_options() {
        let args = PathArgs::new().with("user_id", "u1");
        let options = QueryOptions::new().search("foo").top(10).select(["id"]);
        let request = build_request(&COUNT, &args, &options, RequestBody::Empty).unwrap();
        assert_eq!(request.path, "/users/u1/messages/$count");
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.query_value("$search").map(|v| v.to_wire()).as_deref(), Some("foo"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let args = PathArgs::new().with("user_id", "u1");
        let options = QueryOptions::new().filter("isRead eq false").search("x");
        let a = build_request(&COUNT, &args, &options, RequestBody::Empty).unwrap();
        let b = build_request(&COUNT, &args, &options, RequestBody::Empty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_parameter_makes_no_call() {
        let recorder = Recorder::new();
        let err = tokio_test::block_on(dispatch(
            &recorder,
            &UPDATE_PLACE,
            &PathArgs::new().with("place_id", ""),
            &QueryOptions::new(),
            RequestBody::Empty,
        ))
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "place_id"));
        assert_eq!(recorder.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_errors_propagate_unchanged() {
        let recorder = Recorder::new()
            .respond(RawResponse::new(403).with_body("application/json", r#"{"error":{"code":"Forbidden"}}"#));
        let err = dispatch(
            &recorder,
            &COUNT,
            &PathArgs::new().with("user_id", "u1"),
            &QueryOptions::new(),
            RequestBody::Empty,
        )
        .await
        .unwrap_err();
        match err {
            ApiError::HttpStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, br#"{"error":{"code":"Forbidden"}}"#);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
