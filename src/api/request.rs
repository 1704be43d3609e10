//
//  graph-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Transport-level request values.
//!
//! A [`Request`] is a fully realized call: verb, rendered path, the supplied
//! query pairs (already wire-named) and a body. It is built fresh for every
//! call and handed to a [`Transport`](super::transport::Transport).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::common::ApiResult;

/// Content type used for raw content uploads (`$value`, attachments).
pub const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP verbs used by the Graph endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Returns the method name as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Parses a method name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::Verb;
    ///
    /// assert_eq!(Verb::parse("patch"), Some(Verb::Patch));
    /// assert_eq!(Verb::parse("HEAD"), None);
    /// ```
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single query string value.
///
/// Lists are kept intact until the transport serializes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<String>),
}

impl QueryValue {
    /// Renders the value as it is sent on the wire. Lists are comma-joined.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered query pairs keyed by wire name.
pub type QueryPairs = Vec<(String, QueryValue)>;

/// The body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body at all.
    #[default]
    Empty,
    /// A JSON document, sent as `application/json`.
    Json(Value),
    /// Raw bytes with an explicit content type.
    Bytes {
        data: Vec<u8>,
        content_type: String,
    },
}

impl RequestBody {
    /// Serializes a typed record into a JSON body.
    ///
    /// Records in [`crate::api::models`] skip every `None` field, so the
    /// resulting document holds only the supplied keys.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> ApiResult<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    /// Wraps raw bytes as an `application/octet-stream` body.
    pub fn octet_stream(data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            data: data.into(),
            content_type: OCTET_STREAM.to_string(),
        }
    }

    /// Returns the content type header this body is sent with.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Bytes { content_type, .. } => Some(content_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A realized request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb.
    pub method: Verb,
    /// Path relative to the base URL, or an absolute URL (e.g. a next link).
    pub path: String,
    /// Supplied query pairs, in endpoint order.
    pub query: QueryPairs,
    /// Request body.
    pub body: RequestBody,
}

impl Request {
    /// Creates a request with no query and no body.
    pub fn new(method: Verb, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Looks up a query value by wire name.
    pub fn query_value(&self, key: &str) -> Option<&QueryValue> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_values_are_comma_joined() {
        let value = QueryValue::List(vec!["subject".into(), "from".into(), "receivedDateTime".into()]);
        assert_eq!(value.to_wire(), "subject,from,receivedDateTime");
        assert_eq!(QueryValue::Flag(true).to_wire(), "true");
        assert_eq!(QueryValue::Integer(25).to_wire(), "25");
    }

    #[test]
    fn test_octet_stream_body() {
        let body = RequestBody::octet_stream(b"MIME-Version: 1.0".to_vec());
        assert_eq!(body.content_type(), Some(OCTET_STREAM));
        assert!(RequestBody::Empty.content_type().is_none());
    }

    #[test]
    fn test_json_body_from_record() {
        #[derive(Serialize)]
        struct Rename {
            #[serde(rename = "displayName")]
            display_name: &'static str,
        }
        let body = RequestBody::json(&Rename { display_name: "Archive" }).unwrap();
        assert_eq!(body, RequestBody::Json(json!({"displayName": "Archive"})));
    }

    #[test]
    fn test_verb_round_trip_through_reqwest() {
        assert_eq!(reqwest::Method::from(Verb::Patch), reqwest::Method::PATCH);
        assert_eq!(Verb::parse("delete"), Some(Verb::Delete));
        assert_eq!(Verb::Get.to_string(), "GET");
    }
}
