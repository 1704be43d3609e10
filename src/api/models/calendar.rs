//
//  graph-client
//  api/models/calendar.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Calendar records: calendars, groups, events and the event action bodies.

use serde::{Deserialize, Serialize};

use super::{DateTimeTimeZone, Document, EmailAddress, Importance, ItemBody, Location, Recipient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarColor {
    Auto,
    LightBlue,
    LightGreen,
    LightOrange,
    LightGray,
    LightYellow,
    LightTeal,
    LightPink,
    LightBrown,
    LightRed,
    MaxColor,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<CalendarColor>,
    /// Hex color such as `#FF0000`.
    pub hex_color: Option<String>,
    pub is_default_calendar: Option<bool>,
    pub can_edit: Option<bool>,
    pub can_share: Option<bool>,
    pub owner: Option<EmailAddress>,
    #[serde(flatten)]
    pub additional: Document,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub class_id: Option<String>,
    pub change_key: Option<String>,
    #[serde(flatten)]
    pub additional: Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendeeType {
    Required,
    Optional,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowAs {
    Free,
    Tentative,
    Busy,
    Oof,
    WorkingElsewhere,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sensitivity {
    Normal,
    Personal,
    Private,
    Confidential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnlineMeetingProvider {
    Unknown,
    SkypeForBusiness,
    SkypeForConsumer,
    TeamsForBusiness,
}

/// An event attendee. `kind` goes on the wire as `type`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub email_address: Option<EmailAddress>,
    #[serde(rename = "type")]
    pub kind: Option<AttendeeType>,
    pub status: Option<Document>,
}

impl Attendee {
    pub fn required(address: impl Into<String>) -> Self {
        Self::with_kind(address, AttendeeType::Required)
    }

    pub fn optional(address: impl Into<String>) -> Self {
        Self::with_kind(address, AttendeeType::Optional)
    }

    fn with_kind(address: impl Into<String>, kind: AttendeeType) -> Self {
        Self {
            email_address: Some(EmailAddress {
                address: Some(address.into()),
                name: None,
            }),
            kind: Some(kind),
            status: None,
        }
    }
}

/// How often an event repeats.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    /// `daily`, `weekly`, `absoluteMonthly`, `relativeMonthly`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub interval: Option<i32>,
    pub days_of_week: Option<Vec<String>>,
    pub day_of_month: Option<i32>,
    pub month: Option<i32>,
    pub first_day_of_week: Option<String>,
    pub index: Option<String>,
}

/// How long an event repeats.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRange {
    /// `endDate`, `noEnd` or `numbered`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub number_of_occurrences: Option<i32>,
    pub recurrence_time_zone: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternedRecurrence {
    pub pattern: Option<RecurrencePattern>,
    pub range: Option<RecurrenceRange>,
}

/// An event.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Option<String>,
    pub subject: Option<String>,
    pub body: Option<ItemBody>,
    pub start: Option<DateTimeTimeZone>,
    pub end: Option<DateTimeTimeZone>,
    pub location: Option<Location>,
    pub locations: Option<Vec<Location>>,
    pub attendees: Option<Vec<Attendee>>,
    pub organizer: Option<Recipient>,
    pub is_all_day: Option<bool>,
    pub is_online_meeting: Option<bool>,
    pub online_meeting_provider: Option<OnlineMeetingProvider>,
    pub is_reminder_on: Option<bool>,
    pub reminder_minutes_before_start: Option<i32>,
    pub importance: Option<Importance>,
    pub sensitivity: Option<Sensitivity>,
    pub show_as: Option<ShowAs>,
    pub categories: Option<Vec<String>>,
    pub recurrence: Option<PatternedRecurrence>,
    pub response_requested: Option<bool>,
    pub allow_new_time_proposals: Option<bool>,
    pub hide_attendees: Option<bool>,
    pub transaction_id: Option<String>,
    #[serde(flatten)]
    pub additional: Document,
}

/// A proposed new time sent with `decline` or `tentativelyAccept`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start: Option<DateTimeTimeZone>,
    pub end: Option<DateTimeTimeZone>,
}

/// Body of `accept`, `decline` and `tentativelyAccept`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub comment: Option<String>,
    pub send_response: Option<bool>,
    pub proposed_new_time: Option<TimeSlot>,
}

/// Body of `cancel`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCancel {
    pub comment: Option<String>,
}

/// Body of an event `forward`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForward {
    pub to_recipients: Option<Vec<Recipient>>,
    pub comment: Option<String>,
}

/// Body of `snoozeReminder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnoozeReminder {
    pub new_reminder_time: DateTimeTimeZone,
}

/// Body of `calendar/getSchedule`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSchedule {
    pub schedules: Option<Vec<String>>,
    pub start_time: Option<DateTimeTimeZone>,
    pub end_time: Option<DateTimeTimeZone>,
    /// Slot length in minutes.
    pub availability_view_interval: Option<i32>,
}

/// Body of `findMeetingTimes`. Constraints are open documents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMeetingTimes {
    pub attendees: Option<Vec<Attendee>>,
    pub location_constraint: Option<Document>,
    pub time_constraint: Option<Document>,
    /// ISO 8601 duration, e.g. `PT1H`.
    pub meeting_duration: Option<String>,
    pub max_candidates: Option<i32>,
    pub is_organizer_optional: Option<bool>,
    pub return_suggestion_reasons: Option<bool>,
    pub minimum_attendee_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attendee_kind_is_sent_as_type() {
        assert_eq!(
            serde_json::to_value(Attendee::required("a@contoso.com")).unwrap(),
            json!({"emailAddress": {"address": "a@contoso.com"}, "type": "required"})
        );
    }

    #[test]
    fn test_event_subset() {
        let event = Event {
            subject: Some("Standup".into()),
            start: Some(DateTimeTimeZone::new("2026-03-16T09:00:00", "UTC")),
            show_as: Some(ShowAs::WorkingElsewhere),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(event).unwrap(),
            json!({
                "subject": "Standup",
                "start": {"dateTime": "2026-03-16T09:00:00", "timeZone": "UTC"},
                "showAs": "workingElsewhere"
            })
        );
    }

    #[test]
    fn test_event_response_omits_unset() {
        let response = EventResponse {
            send_response: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(response).unwrap(), json!({"sendResponse": false}));
    }

    #[test]
    fn test_snooze_reminder_wire_shape() {
        let body = SnoozeReminder {
            new_reminder_time: DateTimeTimeZone::new("2026-03-16T10:00:00", "Pacific Standard Time"),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"newReminderTime": {"dateTime": "2026-03-16T10:00:00", "timeZone": "Pacific Standard Time"}})
        );
    }
}
