//
//  graph-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection Wrapper for Graph API Responses
//!
//! Graph returns every collection inside an OData wrapper:
//!
//! ```json
//! {
//!   "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users('u1')/messages",
//!   "@odata.nextLink": "https://graph.microsoft.com/v1.0/users/u1/messages?$skip=10",
//!   "value": [ ... ]
//! }
//! ```
//!
//! Paging is cursor based. The client never follows links on its own; callers
//! read [`Collection::next_link`] and issue the next request themselves (the
//! transport accepts absolute URLs as paths for exactly this purpose).
//!
//! Delta queries end with an `@odata.deltaLink` instead of a next link. Its
//! `$deltatoken` is the sync point for the next incremental round.

use serde::{Deserialize, Serialize};
use url::Url;

/// One page of an OData collection.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `value` array
///
/// # Fields
///
/// | Field | Wire name | Description |
/// |-------|-----------|-------------|
/// | `value` | `value` | Items in the current page |
/// | `next_link` | `@odata.nextLink` | Absolute URL of the next page |
/// | `delta_link` | `@odata.deltaLink` | Absolute URL for the next delta round |
/// | `count` | `@odata.count` | Total count when `$count=true` was requested |
/// | `context` | `@odata.context` | Metadata URL describing the payload |
///
/// # Example
///
/// ```rust
/// use graph_client::api::common::Collection;
/// use serde_json::Value;
///
/// let json = r#"{
///     "value": [{"id": "AAMk1"}],
///     "@odata.nextLink": "https://graph.microsoft.com/v1.0/users/u1/messages?$skip=10"
/// }"#;
///
/// let page: Collection<Value> = serde_json::from_str(json).unwrap();
/// assert!(page.has_next());
/// assert_eq!(page.value.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    /// Items in the current page. Absent arrays decode as empty.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// Absolute URL of the next page, when more results exist.
    #[serde(
        default,
        rename = "@odata.nextLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_link: Option<String>,

    /// Absolute URL to use for the next delta round.
    ///
    /// Only present on the final page of a delta query.
    #[serde(
        default,
        rename = "@odata.deltaLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub delta_link: Option<String>,

    /// Total number of matching items, when `$count=true` was requested.
    #[serde(
        default,
        rename = "@odata.count",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<u64>,

    /// OData metadata context URL.
    #[serde(
        default,
        rename = "@odata.context",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,
}

impl<T> Collection<T> {
    /// Checks if there are more pages of results available.
    pub fn has_next(&self) -> bool {
        self.next_link.is_some()
    }

    /// Returns the URL for the next page of results.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Returns the delta link that closes a delta round.
    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }

    /// Extracts the `$deltatoken` query value from the delta link.
    ///
    /// # Returns
    ///
    /// - `Some(String)` - The token to pass as `delta_token` next time
    /// - `None` - No delta link, or the link carries no token
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::common::Collection;
    /// use serde_json::Value;
    ///
    /// let page: Collection<Value> = serde_json::from_str(r#"{
    ///     "value": [],
    ///     "@odata.deltaLink": "https://graph.microsoft.com/v1.0/users/u1/messages/delta()?$deltatoken=abc123"
    /// }"#).unwrap();
    ///
    /// assert_eq!(page.delta_token().as_deref(), Some("abc123"));
    /// ```
    pub fn delta_token(&self) -> Option<String> {
        let link = Url::parse(self.delta_link.as_deref()?).ok()?;
        link.query_pairs()
            .find(|(key, _)| key == "$deltatoken")
            .map(|(_, value)| value.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_collection_defaults() {
        let page: Collection<Value> = serde_json::from_str("{}").unwrap();
        assert!(page.value.is_empty());
        assert!(!page.has_next());
        assert!(page.delta_link().is_none());
        assert!(page.delta_token().is_none());
    }

    #[test]
    fn test_collection_reads_odata_annotations() {
        let json = r#"{
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#places",
            "@odata.count": 42,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/places/microsoft.graph.room?$skiptoken=X",
            "value": [{"id": "r1"}, {"id": "r2"}]
        }"#;
        let page: Collection<Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.value.len(), 2);
        assert_eq!(page.count, Some(42));
        assert_eq!(
            page.next_link(),
            Some("https://graph.microsoft.com/v1.0/places/microsoft.graph.room?$skiptoken=X")
        );
    }

    #[test]
    fn test_serialize_skips_missing_links() {
        let page = Collection::<u32> {
            value: vec![1],
            next_link: None,
            delta_link: None,
            count: None,
            context: None,
        };
        assert_eq!(serde_json::to_string(&page).unwrap(), r#"{"value":[1]}"#);
    }
}
