//
//  graph-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Adapter
//!
//! The [`Transport`] trait is the single seam between the endpoint layer and
//! the network. Implementors provide one method, [`Transport::execute`], which
//! performs exactly one HTTP round trip and returns the raw response. The verb
//! helpers and response normalization are provided on top of it, so every
//! implementation (the reqwest-backed [`GraphClient`](super::GraphClient),
//! a recording double in tests) behaves identically.
//!
//! ## Normalization
//!
//! | Raw response | Result |
//! |--------------|--------|
//! | status outside 2xx | `Err(ApiError::HttpStatus { status, body })` |
//! | 204, or empty body | `Ok(Payload::Empty)` |
//! | JSON content type | `Ok(Payload::Json(..))` |
//! | anything else | `Ok(Payload::Bytes(..))` |
//!
//! No retries are attempted.

use async_trait::async_trait;
use tracing::trace;

use super::common::{ApiError, ApiResult, Payload};
use super::request::{QueryPairs, Request, RequestBody, Verb};

/// An undecoded HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response with the given status and no body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Creates a `200 OK` JSON response.
    pub fn json(body: &serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn with_body(mut self, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        self.content_type = Some(content_type.to_string());
        self.body = body.into();
        self
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decodes a raw response.
///
/// # Errors
///
/// Returns [`ApiError::HttpStatus`] with the body bytes preserved for
/// any non-2xx status, and [`ApiError::Json`] when a body labelled as JSON
/// fails to parse.
pub fn normalize(raw: RawResponse) -> ApiResult<Payload> {
    if !raw.is_success() {
        return Err(ApiError::HttpStatus {
            status: raw.status,
            body: raw.body,
        });
    }

    let is_json = raw
        .content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    // Whitespace is only insignificant in JSON; binary content keeps every byte.
    let blank = if is_json {
        raw.body.iter().all(u8::is_ascii_whitespace)
    } else {
        raw.body.is_empty()
    };
    if raw.status == 204 || blank {
        return Ok(Payload::Empty);
    }

    if is_json {
        Ok(Payload::Json(serde_json::from_slice(&raw.body)?))
    } else {
        Ok(Payload::Bytes(raw.body))
    }
}

/// The capability set every endpoint call goes through.
///
/// # Example
///
/// ```rust,no_run
/// use graph_client::api::{GraphClient, Transport};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let me = client.get("/me", Vec::new()).await?;
/// println!("{:?}", me.as_json());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP round trip.
    ///
    /// Implementations must not interpret the status code; that is
    /// [`normalize`](Transport::normalize)'s job.
    async fn execute(&self, request: Request) -> ApiResult<RawResponse>;

    /// Decodes a raw response. See the module docs for the rules.
    fn normalize(&self, raw: RawResponse) -> ApiResult<Payload> {
        normalize(raw)
    }

    /// Executes a request and normalizes its response.
    async fn send(&self, request: Request) -> ApiResult<Payload> {
        trace!(method = %request.method, path = %request.path, "dispatching");
        let raw = self.execute(request).await?;
        self.normalize(raw)
    }

    async fn get(&self, path: &str, query: QueryPairs) -> ApiResult<Payload> {
        self.send(Request::new(Verb::Get, path).with_query(query))
            .await
    }

    /// Sends a POST. The body's content type travels with it.
    async fn post(&self, path: &str, body: RequestBody, query: QueryPairs) -> ApiResult<Payload> {
        self.send(
            Request::new(Verb::Post, path)
                .with_query(query)
                .with_body(body),
        )
        .await
    }

    async fn put(&self, path: &str, body: RequestBody, query: QueryPairs) -> ApiResult<Payload> {
        self.send(
            Request::new(Verb::Put, path)
                .with_query(query)
                .with_body(body),
        )
        .await
    }

    async fn patch(&self, path: &str, body: RequestBody, query: QueryPairs) -> ApiResult<Payload> {
        self.send(
            Request::new(Verb::Patch, path)
                .with_query(query)
                .with_body(body),
        )
        .await
    }

    async fn delete(&self, path: &str, query: QueryPairs) -> ApiResult<Payload> {
        self.send(Request::new(Verb::Delete, path).with_query(query))
            .await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A recording transport used by the segment and dispatcher tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Records every request and replays canned responses (`204` when the
    /// queue runs dry).
    #[derive(Default)]
    pub struct Recorder {
        pub requests: Mutex<Vec<Request>>,
        responses: Mutex<VecDeque<RawResponse>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, raw: RawResponse) -> Self {
            self.responses.lock().unwrap().push_back(raw);
            self
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last(&self) -> Request {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn execute(&self, request: Request) -> ApiResult<RawResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| RawResponse::new(204)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_error_keeps_status_and_body() {
        let raw = RawResponse::new(429).with_body("application/json", r#"{"error":{"code":"TooManyRequests"}}"#);
        match normalize(raw) {
            Err(ApiError::HttpStatus { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, br#"{"error":{"code":"TooManyRequests"}}"#);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_error_keeps_non_utf8_body() {
        let raw = RawResponse::new(500).with_body("text/plain", vec![0xff, 0xfe, b'x']);
        match normalize(raw) {
            Err(ApiError::HttpStatus { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, vec![0xff, 0xfe, b'x']);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_empty_and_no_content() {
        assert_eq!(normalize(RawResponse::new(204)).unwrap(), Payload::Empty);
        assert_eq!(normalize(RawResponse::new(202)).unwrap(), Payload::Empty);
        let raw = RawResponse::new(200).with_body("application/json", "  ");
        assert_eq!(normalize(raw).unwrap(), Payload::Empty);
    }

    #[test]
    fn test_normalize_json_and_bytes() {
        let raw = RawResponse::json(&json!({"id": "m1"}));
        assert_eq!(normalize(raw).unwrap(), Payload::Json(json!({"id": "m1"})));

        let raw = RawResponse::new(200).with_body("application/json; odata.metadata=minimal", "[1,2]");
        assert_eq!(normalize(raw).unwrap(), Payload::Json(json!([1, 2])));

        let raw = RawResponse::new(200).with_body("application/octet-stream", vec![0u8, 159, 146]);
        assert_eq!(normalize(raw).unwrap(), Payload::Bytes(vec![0, 159, 146]));

        let raw = RawResponse::new(200).with_body("text/plain", "12");
        assert_eq!(normalize(raw).unwrap(), Payload::Bytes(b"12".to_vec()));
    }

    #[test]
    fn test_normalize_keeps_whitespace_only_content() {
        let raw = RawResponse::new(200).with_body("application/octet-stream", b"\r\n".to_vec());
        assert_eq!(normalize(raw).unwrap(), Payload::Bytes(vec![13, 10]));

        let raw = RawResponse::new(200).with_body("text/plain", " ");
        assert_eq!(normalize(raw).unwrap(), Payload::Bytes(b" ".to_vec()));

        let raw = RawResponse::new(200).with_body("application/octet-stream", Vec::new());
        assert_eq!(normalize(raw).unwrap(), Payload::Empty);
    }

    #[test]
    fn test_normalize_rejects_malformed_json() {
        let raw = RawResponse::new(200).with_body("application/json", "{oops");
        assert!(matches!(normalize(raw), Err(ApiError::Json(_))));
    }

    #[tokio::test]
    async fn test_verb_helpers_build_requests() {
        let recorder = Recorder::new();
        recorder
            .patch(
                "/places/p1",
                RequestBody::Json(json!({"displayName": "Room A"})),
                Vec::new(),
            )
            .await
            .unwrap();
        let request = recorder.last();
        assert_eq!(request.method, Verb::Patch);
        assert_eq!(request.path, "/places/p1");
        assert_eq!(request.body, RequestBody::Json(json!({"displayName": "Room A"})));

        recorder.delete("/places/p1", Vec::new()).await.unwrap();
        assert_eq!(recorder.last().method, Verb::Delete);
        assert_eq!(recorder.calls(), 2);
    }
}
