//
//  graph-client
//  api/common/payload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Normalized response bodies.
//!
//! Every endpoint returns a [`Payload`]: decoded JSON, raw bytes (content
//! endpoints such as `/$value`, or any non-JSON body), or nothing at all.
//! The segments never reshape a payload; the helpers here are for callers.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiResult};

/// The decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON document (object, collection wrapper or scalar).
    Json(Value),
    /// A raw byte stream, e.g. MIME content from a `$value` endpoint.
    Bytes(Vec<u8>),
    /// The response had no body (typically `204 No Content` or `202 Accepted`).
    Empty,
}

impl Payload {
    /// Returns `true` when the response carried no body.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the JSON document, if this payload is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the raw bytes, if this payload is a byte stream.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Consumes the payload and returns the JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedPayload`] for byte or empty payloads.
    pub fn into_json(self) -> ApiResult<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Bytes(bytes) => Err(ApiError::UnexpectedPayload(format!(
                "expected JSON, got {} raw bytes",
                bytes.len()
            ))),
            Self::Empty => Err(ApiError::UnexpectedPayload(
                "expected JSON, got an empty body".to_string(),
            )),
        }
    }

    /// Consumes the payload and returns its bytes.
    ///
    /// JSON payloads are re-encoded; an empty payload yields no bytes.
    pub fn into_bytes(self) -> ApiResult<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Json(value) => Ok(serde_json::to_vec(&value)?),
            Self::Empty => Ok(Vec::new()),
        }
    }

    /// Deserializes a JSON payload into `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::common::{Collection, Payload};
    /// use serde_json::{json, Value};
    ///
    /// let payload = Payload::Json(json!({"value": [{"id": "1"}]}));
    /// let page: Collection<Value> = payload.deserialize().unwrap();
    /// assert_eq!(page.value.len(), 1);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(self) -> ApiResult<T> {
        Ok(serde_json::from_value(self.into_json()?)?)
    }

    /// Reads the integer returned by a `/$count` endpoint.
    ///
    /// Graph answers `$count` with a `text/plain` body, sometimes prefixed by
    /// a UTF-8 byte order mark; a bare JSON number is accepted too.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::common::Payload;
    ///
    /// assert_eq!(Payload::Bytes(b"\xEF\xBB\xBF42".to_vec()).count().unwrap(), 42);
    /// assert_eq!(Payload::Json(serde_json::json!(7)).count().unwrap(), 7);
    /// ```
    pub fn count(&self) -> ApiResult<u64> {
        match self {
            Self::Json(value) => value.as_u64().ok_or_else(|| {
                ApiError::UnexpectedPayload(format!("expected a count, got {value}"))
            }),
            Self::Bytes(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                let text = text.trim_start_matches('\u{feff}').trim();
                text.parse().map_err(|_| {
                    ApiError::UnexpectedPayload(format!("expected a count, got {text:?}"))
                })
            }
            Self::Empty => Err(ApiError::UnexpectedPayload(
                "expected a count, got an empty body".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_from_plain_text() {
        assert_eq!(Payload::Bytes(b"17\n".to_vec()).count().unwrap(), 17);
    }

    #[test]
    fn test_count_rejects_garbage() {
        let err = Payload::Bytes(b"many".to_vec()).count().unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedPayload(_)));
        assert!(Payload::Empty.count().is_err());
    }

    #[test]
    fn test_into_json_rejects_bytes() {
        assert!(Payload::Bytes(vec![1, 2, 3]).into_json().is_err());
        assert_eq!(
            Payload::Json(json!({"id": "a"})).into_json().unwrap(),
            json!({"id": "a"})
        );
    }

    #[test]
    fn test_into_bytes() {
        assert_eq!(Payload::Empty.into_bytes().unwrap(), Vec::<u8>::new());
        assert_eq!(
            Payload::Json(json!({"a": 1})).into_bytes().unwrap(),
            br#"{"a":1}"#.to_vec()
        );
    }
}
