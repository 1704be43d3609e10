//
//  graph-client
//  api/models/places.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Place records (rooms and room lists).

use serde::{Deserialize, Serialize};

use super::{Document, OutlookGeoCoordinates, PhysicalAddress};

/// `@odata.type` of a room.
pub const ROOM_TYPE: &str = "#microsoft.graph.room";
/// `@odata.type` of a room list.
pub const ROOM_LIST_TYPE: &str = "#microsoft.graph.roomList";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingType {
    Unknown,
    Standard,
    Reserved,
}

/// A place. Room and room list fields share one record; the API ignores
/// fields that do not apply to the addressed type.
///
/// `update_place` requires `odata_type` to tell the service which derived
/// type is being patched.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<PhysicalAddress>,
    pub geo_coordinates: Option<OutlookGeoCoordinates>,

    // room
    pub email_address: Option<String>,
    pub nickname: Option<String>,
    pub building: Option<String>,
    pub floor_number: Option<i32>,
    pub floor_label: Option<String>,
    pub label: Option<String>,
    pub capacity: Option<i32>,
    pub booking_type: Option<BookingType>,
    pub audio_device_name: Option<String>,
    pub video_device_name: Option<String>,
    pub display_device_name: Option<String>,
    pub is_wheel_chair_accessible: Option<bool>,
    pub tags: Option<Vec<String>>,

    #[serde(flatten)]
    pub additional: Document,
}

impl Place {
    /// An empty patch addressed at a room.
    pub fn room() -> Self {
        Self {
            odata_type: Some(ROOM_TYPE.to_string()),
            ..Default::default()
        }
    }

    /// An empty patch addressed at a room list.
    pub fn room_list() -> Self {
        Self {
            odata_type: Some(ROOM_LIST_TYPE.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_patch_uses_odata_type_wire_name() {
        let patch = Place {
            capacity: Some(12),
            is_wheel_chair_accessible: Some(true),
            ..Place::room()
        };
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.room",
                "capacity": 12,
                "isWheelChairAccessible": true
            })
        );
    }

    #[test]
    fn test_unknown_properties_round_trip_through_additional() {
        let place: Place = serde_json::from_value(json!({
            "id": "r1",
            "displayName": "Conf Room Adams",
            "placeId": "cf100"
        }))
        .unwrap();
        assert_eq!(place.id.as_deref(), Some("r1"));
        assert_eq!(place.additional.get("placeId"), Some(&json!("cf100")));
    }
}
