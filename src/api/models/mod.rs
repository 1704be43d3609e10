//
//  graph-client
//  api/models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Body Records
//!
//! Typed bodies for every write endpoint. All records share three rules:
//!
//! - Every optional field is an `Option` and is omitted when `None`
//!   (`serde_with::skip_serializing_none`), so a body holds exactly the
//!   supplied keys and never an explicit `null`.
//! - Field names are converted to the wire's camelCase; reserved words are
//!   renamed explicitly (`kind` → `type`, `odata_type` → `@odata.type`).
//! - Each entity record carries a flattened `additional` map for properties
//!   the record does not model.
//!
//! The records derive `Deserialize` too, so the same types can read
//! responses via [`Payload::deserialize`](super::common::Payload::deserialize).
//!
//! ## Example
//!
//! ```rust
//! use graph_client::api::models::places::Place;
//!
//! let update = Place { display_name: Some("Room A".into()), ..Default::default() };
//! assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"displayName":"Room A"}"#);
//! ```

pub mod calendar;
pub mod mail;
pub mod places;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open key/value document for schema parts the client does not model.
pub type Document = Map<String, Value>;

/// An email address with an optional display name.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub address: Option<String>,
    pub name: Option<String>,
}

/// A message recipient.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: Option<EmailAddress>,
}

impl Recipient {
    /// A recipient with just an address.
    ///
    /// ```rust
    /// use graph_client::api::models::Recipient;
    ///
    /// let to = Recipient::address("adele@contoso.com");
    /// assert_eq!(
    ///     serde_json::to_value(&to).unwrap(),
    ///     serde_json::json!({"emailAddress": {"address": "adele@contoso.com"}})
    /// );
    /// ```
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            email_address: Some(EmailAddress {
                address: Some(address.into()),
                name: None,
            }),
        }
    }

    pub fn named(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            email_address: Some(EmailAddress {
                address: Some(address.into()),
                name: Some(name.into()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyType {
    Text,
    Html,
}

/// Message or event body content.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content: Option<String>,
    pub content_type: Option<BodyType>,
}

impl ItemBody {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            content_type: Some(BodyType::Text),
        }
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            content_type: Some(BodyType::Html),
        }
    }
}

/// A local date and time plus the IANA or Windows time zone it is in.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    /// ISO 8601 local time, e.g. `2026-03-15T09:00:00`.
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
}

impl DateTimeTimeZone {
    pub fn new(date_time: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            time_zone: Some(time_zone.into()),
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country_or_region: Option<String>,
    pub postal_code: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlookGeoCoordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub altitude_accuracy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagStatus {
    NotFlagged,
    Complete,
    Flagged,
}

/// Follow-up flag on a message.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowupFlag {
    pub flag_status: Option<FlagStatus>,
    pub start_date_time: Option<DateTimeTimeZone>,
    pub due_date_time: Option<DateTimeTimeZone>,
    pub completed_date_time: Option<DateTimeTimeZone>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternetMessageHeader {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl InternetMessageHeader {
    /// Custom headers must start with `X-` or `x-`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// Where an event takes place.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub display_name: Option<String>,
    pub location_email_address: Option<String>,
    pub location_uri: Option<String>,
    pub location_type: Option<String>,
    pub unique_id: Option<String>,
    pub unique_id_type: Option<String>,
    pub address: Option<PhysicalAddress>,
    pub coordinates: Option<OutlookGeoCoordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        assert_eq!(serde_json::to_value(FollowupFlag::default()).unwrap(), json!({}));
        let flag = FollowupFlag {
            flag_status: Some(FlagStatus::Flagged),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(flag).unwrap(), json!({"flagStatus": "flagged"}));
    }

    #[test]
    fn test_item_body_wire_names() {
        assert_eq!(
            serde_json::to_value(ItemBody::html("<b>hi</b>")).unwrap(),
            json!({"content": "<b>hi</b>", "contentType": "html"})
        );
    }

    #[test]
    fn test_location_nested_subset() {
        let location = Location {
            display_name: Some("Conf Room 1".into()),
            address: Some(PhysicalAddress {
                city: Some("Redmond".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(location).unwrap(),
            json!({"displayName": "Conf Room 1", "address": {"city": "Redmond"}})
        );
    }
}
