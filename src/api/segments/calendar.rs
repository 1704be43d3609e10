//
//  graph-client
//  api/segments/calendar.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Calendar endpoints under `/users/{user_id}`.

use super::{action, read, write};
use crate::api::common::{ApiResult, Payload};
use crate::api::endpoint::{BodyMode, Endpoint, ResponseShape::*, Segment};
use crate::api::models::calendar::{
    Calendar, CalendarGroup, Event, EventCancel, EventForward, EventResponse, FindMeetingTimes,
    GetSchedule, SnoozeReminder,
};
use crate::api::models::mail::{Attachment, UploadSessionRequest};
use crate::api::query::{self, QueryOptions};
use crate::api::transport::Transport;

const S: Segment = Segment::UserCalendar;

endpoint_table! {
    // calendars
    LIST_CALENDARS = Endpoint::get(S, "list_calendars", "/users/{user_id}/calendars")
        .query(query::LIST).returns(Collection).summary("List calendars");
    CREATE_CALENDAR = Endpoint::post(S, "create_calendar", "/users/{user_id}/calendars")
        .summary("Create a calendar");
    GET_CALENDAR_COUNT = Endpoint::get(S, "get_calendar_count", "/users/{user_id}/calendars/$count")
        .query(query::COUNT).returns(Count).summary("Count calendars");
    GET_CALENDAR = Endpoint::get(S, "get_calendar", "/users/{user_id}/calendars/{calendar_id}")
        .query(query::GET).summary("Get a calendar");
    UPDATE_CALENDAR = Endpoint::patch(S, "update_calendar", "/users/{user_id}/calendars/{calendar_id}")
        .summary("Update a calendar");
    DELETE_CALENDAR = Endpoint::delete(S, "delete_calendar", "/users/{user_id}/calendars/{calendar_id}")
        .summary("Delete a calendar");

    // default calendar
    GET_DEFAULT_CALENDAR = Endpoint::get(S, "get_default_calendar", "/users/{user_id}/calendar")
        .query(query::GET).summary("Get the default calendar");
    UPDATE_DEFAULT_CALENDAR = Endpoint::patch(S, "update_default_calendar", "/users/{user_id}/calendar")
        .summary("Update the default calendar");
    GET_SCHEDULE = Endpoint::post(S, "get_schedule", "/users/{user_id}/calendar/microsoft.graph.getSchedule")
        .returns(Collection).summary("Get free/busy information for users, lists or resources");

    // calendar groups
    LIST_CALENDAR_GROUPS = Endpoint::get(S, "list_calendar_groups", "/users/{user_id}/calendarGroups")
        .query(query::LIST).returns(Collection).summary("List calendar groups");
    CREATE_CALENDAR_GROUP = Endpoint::post(S, "create_calendar_group", "/users/{user_id}/calendarGroups")
        .summary("Create a calendar group");
    GET_CALENDAR_GROUP_COUNT = Endpoint::get(S, "get_calendar_group_count", "/users/{user_id}/calendarGroups/$count")
        .query(query::COUNT).returns(Count).summary("Count calendar groups");
    GET_CALENDAR_GROUP = Endpoint::get(S, "get_calendar_group", "/users/{user_id}/calendarGroups/{calendar_group_id}")
        .query(query::GET).summary("Get a calendar group");
    UPDATE_CALENDAR_GROUP = Endpoint::patch(S, "update_calendar_group", "/users/{user_id}/calendarGroups/{calendar_group_id}")
        .summary("Update a calendar group");
    DELETE_CALENDAR_GROUP = Endpoint::delete(S, "delete_calendar_group", "/users/{user_id}/calendarGroups/{calendar_group_id}")
        .summary("Delete a calendar group");

    // events in a calendar
    LIST_CALENDAR_EVENTS = Endpoint::get(S, "list_calendar_events", "/users/{user_id}/calendars/{calendar_id}/events")
        .query(query::LIST).returns(Collection).summary("List the events in a calendar");
    CREATE_CALENDAR_EVENT = Endpoint::post(S, "create_calendar_event", "/users/{user_id}/calendars/{calendar_id}/events")
        .summary("Create an event in a calendar");
    GET_CALENDAR_EVENT_COUNT = Endpoint::get(S, "get_calendar_event_count", "/users/{user_id}/calendars/{calendar_id}/events/$count")
        .query(query::COUNT).returns(Count).summary("Count the events in a calendar");
    GET_CALENDAR_EVENT = Endpoint::get(S, "get_calendar_event", "/users/{user_id}/calendars/{calendar_id}/events/{event_id}")
        .query(query::GET).summary("Get an event in a calendar");
    UPDATE_CALENDAR_EVENT = Endpoint::patch(S, "update_calendar_event", "/users/{user_id}/calendars/{calendar_id}/events/{event_id}")
        .summary("Update an event in a calendar");
    DELETE_CALENDAR_EVENT = Endpoint::delete(S, "delete_calendar_event", "/users/{user_id}/calendars/{calendar_id}/events/{event_id}")
        .summary("Delete an event in a calendar");

    // calendar view
    LIST_CALENDAR_VIEW = Endpoint::get(S, "list_calendar_view", "/users/{user_id}/calendarView")
        .query(query::CALENDAR_VIEW).returns(Collection).summary("List occurrences inside a time window");
    GET_CALENDAR_VIEW_COUNT = Endpoint::get(S, "get_calendar_view_count", "/users/{user_id}/calendarView/$count")
        .query(query::CALENDAR_VIEW_COUNT).returns(Count).summary("Count occurrences inside a time window");
    CALENDAR_VIEW_DELTA = Endpoint::get(S, "calendar_view_delta", "/users/{user_id}/calendarView/microsoft.graph.delta()")
        .query(query::CALENDAR_VIEW_DELTA).returns(Collection).summary("Track occurrence changes inside a time window");

    // events
    LIST_EVENTS = Endpoint::get(S, "list_events", "/users/{user_id}/events")
        .query(query::LIST).returns(Collection).summary("List events");
    CREATE_EVENT = Endpoint::post(S, "create_event", "/users/{user_id}/events")
        .summary("Create an event in the default calendar");
    GET_EVENT_COUNT = Endpoint::get(S, "get_event_count", "/users/{user_id}/events/$count")
        .query(query::COUNT).returns(Count).summary("Count events");
    EVENT_DELTA = Endpoint::get(S, "event_delta", "/users/{user_id}/events/microsoft.graph.delta()")
        .query(query::CALENDAR_VIEW_DELTA).returns(Collection).summary("Track event changes");
    GET_EVENT = Endpoint::get(S, "get_event", "/users/{user_id}/events/{event_id}")
        .query(query::GET).summary("Get an event");
    UPDATE_EVENT = Endpoint::patch(S, "update_event", "/users/{user_id}/events/{event_id}")
        .summary("Update an event");
    DELETE_EVENT = Endpoint::delete(S, "delete_event", "/users/{user_id}/events/{event_id}")
        .summary("Delete an event");
    LIST_EVENT_INSTANCES = Endpoint::get(S, "list_event_instances", "/users/{user_id}/events/{event_id}/instances")
        .query(query::INSTANCES).returns(Collection).summary("List the occurrences of a recurring event");
    ACCEPT_EVENT = Endpoint::post(S, "accept_event", "/users/{user_id}/events/{event_id}/microsoft.graph.accept")
        .returns(Empty).summary("Accept an event");
    DECLINE_EVENT = Endpoint::post(S, "decline_event", "/users/{user_id}/events/{event_id}/microsoft.graph.decline")
        .returns(Empty).summary("Decline an event");
    TENTATIVELY_ACCEPT_EVENT = Endpoint::post(S, "tentatively_accept_event", "/users/{user_id}/events/{event_id}/microsoft.graph.tentativelyAccept")
        .returns(Empty).summary("Tentatively accept an event");
    CANCEL_EVENT = Endpoint::post(S, "cancel_event", "/users/{user_id}/events/{event_id}/microsoft.graph.cancel")
        .returns(Empty).summary("Cancel a meeting as its organizer");
    FORWARD_EVENT = Endpoint::post(S, "forward_event", "/users/{user_id}/events/{event_id}/microsoft.graph.forward")
        .returns(Empty).summary("Forward a meeting request");
    DISMISS_REMINDER = Endpoint::post(S, "dismiss_reminder", "/users/{user_id}/events/{event_id}/microsoft.graph.dismissReminder")
        .body(BodyMode::None).returns(Empty).summary("Dismiss an event reminder");
    SNOOZE_REMINDER = Endpoint::post(S, "snooze_reminder", "/users/{user_id}/events/{event_id}/microsoft.graph.snoozeReminder")
        .returns(Empty).summary("Postpone an event reminder");
    PERMANENT_DELETE_EVENT = Endpoint::post(S, "permanent_delete_event", "/users/{user_id}/events/{event_id}/microsoft.graph.permanentDelete")
        .body(BodyMode::None).returns(Empty).summary("Permanently delete an event");

    // event attachments
    LIST_EVENT_ATTACHMENTS = Endpoint::get(S, "list_event_attachments", "/users/{user_id}/events/{event_id}/attachments")
        .query(query::LIST).returns(Collection).summary("List event attachments");
    CREATE_EVENT_ATTACHMENT = Endpoint::post(S, "create_event_attachment", "/users/{user_id}/events/{event_id}/attachments")
        .summary("Add an attachment to an event");
    GET_EVENT_ATTACHMENT_COUNT = Endpoint::get(S, "get_event_attachment_count", "/users/{user_id}/events/{event_id}/attachments/$count")
        .query(query::COUNT).returns(Count).summary("Count event attachments");
    GET_EVENT_ATTACHMENT = Endpoint::get(S, "get_event_attachment", "/users/{user_id}/events/{event_id}/attachments/{attachment_id}")
        .query(query::GET).summary("Get an event attachment");
    DELETE_EVENT_ATTACHMENT = Endpoint::delete(S, "delete_event_attachment", "/users/{user_id}/events/{event_id}/attachments/{attachment_id}")
        .summary("Delete an event attachment");
    CREATE_EVENT_ATTACHMENT_UPLOAD_SESSION = Endpoint::post(S, "create_event_attachment_upload_session", "/users/{user_id}/events/{event_id}/attachments/microsoft.graph.createUploadSession")
        .summary("Start an upload session for a large event attachment");

    // scheduling
    FIND_MEETING_TIMES = Endpoint::post(S, "find_meeting_times", "/users/{user_id}/microsoft.graph.findMeetingTimes")
        .summary("Suggest meeting times for a set of attendees");
    REMINDER_VIEW = Endpoint::get(S, "reminder_view", "/users/{user_id}/microsoft.graph.reminderView(StartDateTime='{start_date_time}',EndDateTime='{end_date_time}')")
        .query(query::LIST).returns(Collection).summary("List reminders inside a time window");
}

/// Calendar endpoints for one transport.
///
/// ```rust,no_run
/// use graph_client::api::{GraphClient, QueryOptions};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let view = client
///     .user_calendar()
///     .list_calendar_view(
///         "adele@contoso.com",
///         &QueryOptions::new().window("2026-03-16T00:00:00Z", "2026-03-23T00:00:00Z"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct UserCalendar<'a> {
    transport: &'a dyn Transport,
}

impl<'a> UserCalendar<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // ---- calendars ----

    pub async fn list_calendars(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_CALENDARS, &[user_id], query).await
    }

    pub async fn create_calendar(&self, user_id: &str, body: &Calendar) -> ApiResult<Payload> {
        write(self.transport, &CREATE_CALENDAR, &[user_id], body).await
    }

    pub async fn get_calendar_count(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR_COUNT, &[user_id], query).await
    }

    pub async fn get_calendar(
        &self,
        user_id: &str,
        calendar_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR, &[user_id, calendar_id], query).await
    }

    pub async fn update_calendar(
        &self,
        user_id: &str,
        calendar_id: &str,
        body: &Calendar,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_CALENDAR, &[user_id, calendar_id], body).await
    }

    pub async fn delete_calendar(&self, user_id: &str, calendar_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_CALENDAR, &[user_id, calendar_id]).await
    }

    // ---- default calendar ----

    pub async fn get_default_calendar(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_DEFAULT_CALENDAR, &[user_id], query).await
    }

    pub async fn update_default_calendar(&self, user_id: &str, body: &Calendar) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_DEFAULT_CALENDAR, &[user_id], body).await
    }

    /// Free/busy lookup. The response `value` holds one schedule per
    /// requested SMTP address.
    pub async fn get_schedule(&self, user_id: &str, body: &GetSchedule) -> ApiResult<Payload> {
        write(self.transport, &GET_SCHEDULE, &[user_id], body).await
    }

    // ---- calendar groups ----

    pub async fn list_calendar_groups(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_CALENDAR_GROUPS, &[user_id], query).await
    }

    pub async fn create_calendar_group(
        &self,
        user_id: &str,
        body: &CalendarGroup,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_CALENDAR_GROUP, &[user_id], body).await
    }

    pub async fn get_calendar_group_count(
        &self,
        user_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR_GROUP_COUNT, &[user_id], query).await
    }

    pub async fn get_calendar_group(
        &self,
        user_id: &str,
        calendar_group_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR_GROUP, &[user_id, calendar_group_id], query).await
    }

    pub async fn update_calendar_group(
        &self,
        user_id: &str,
        calendar_group_id: &str,
        body: &CalendarGroup,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_CALENDAR_GROUP, &[user_id, calendar_group_id], body).await
    }

    pub async fn delete_calendar_group(
        &self,
        user_id: &str,
        calendar_group_id: &str,
    ) -> ApiResult<Payload> {
        action(self.transport, &DELETE_CALENDAR_GROUP, &[user_id, calendar_group_id]).await
    }

    // ---- events in a calendar ----

    pub async fn list_calendar_events(
        &self,
        user_id: &str,
        calendar_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_CALENDAR_EVENTS, &[user_id, calendar_id], query).await
    }

    pub async fn create_calendar_event(
        &self,
        user_id: &str,
        calendar_id: &str,
        body: &Event,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_CALENDAR_EVENT, &[user_id, calendar_id], body).await
    }

    pub async fn get_calendar_event_count(
        &self,
        user_id: &str,
        calendar_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR_EVENT_COUNT, &[user_id, calendar_id], query).await
    }

    pub async fn get_calendar_event(
        &self,
        user_id: &str,
        calendar_id: &str,
        event_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, calendar_id, event_id];
        read(self.transport, &GET_CALENDAR_EVENT, &ids, query).await
    }

    pub async fn update_calendar_event(
        &self,
        user_id: &str,
        calendar_id: &str,
        event_id: &str,
        body: &Event,
    ) -> ApiResult<Payload> {
        let ids = [user_id, calendar_id, event_id];
        write(self.transport, &UPDATE_CALENDAR_EVENT, &ids, body).await
    }

    pub async fn delete_calendar_event(
        &self,
        user_id: &str,
        calendar_id: &str,
        event_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, calendar_id, event_id];
        action(self.transport, &DELETE_CALENDAR_EVENT, &ids).await
    }

    // ---- calendar view ----

    /// Expands recurring series into occurrences. The service rejects the
    /// call unless `query.window(start, end)` is set.
    pub async fn list_calendar_view(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_CALENDAR_VIEW, &[user_id], query).await
    }

    pub async fn get_calendar_view_count(
        &self,
        user_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CALENDAR_VIEW_COUNT, &[user_id], query).await
    }

    pub async fn calendar_view_delta(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &CALENDAR_VIEW_DELTA, &[user_id], query).await
    }

    // ---- events ----

    pub async fn list_events(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_EVENTS, &[user_id], query).await
    }

    pub async fn create_event(&self, user_id: &str, body: &Event) -> ApiResult<Payload> {
        write(self.transport, &CREATE_EVENT, &[user_id], body).await
    }

    pub async fn get_event_count(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_EVENT_COUNT, &[user_id], query).await
    }

    pub async fn event_delta(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &EVENT_DELTA, &[user_id], query).await
    }

    pub async fn get_event(
        &self,
        user_id: &str,
        event_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_EVENT, &[user_id, event_id], query).await
    }

    pub async fn update_event(&self, user_id: &str, event_id: &str, body: &Event) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_EVENT, &[user_id, event_id], body).await
    }

    pub async fn delete_event(&self, user_id: &str, event_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_EVENT, &[user_id, event_id]).await
    }

    pub async fn list_event_instances(
        &self,
        user_id: &str,
        event_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_EVENT_INSTANCES, &[user_id, event_id], query).await
    }

    pub async fn accept_event(
        &self,
        user_id: &str,
        event_id: &str,
        body: &EventResponse,
    ) -> ApiResult<Payload> {
        write(self.transport, &ACCEPT_EVENT, &[user_id, event_id], body).await
    }

    pub async fn decline_event(
        &self,
        user_id: &str,
        event_id: &str,
        body: &EventResponse,
    ) -> ApiResult<Payload> {
        write(self.transport, &DECLINE_EVENT, &[user_id, event_id], body).await
    }

    pub async fn tentatively_accept_event(
        &self,
        user_id: &str,
        event_id: &str,
        body: &EventResponse,
    ) -> ApiResult<Payload> {
        write(self.transport, &TENTATIVELY_ACCEPT_EVENT, &[user_id, event_id], body).await
    }

    /// Organizer-only. Attendees decline instead.
    pub async fn cancel_event(
        &self,
        user_id: &str,
        event_id: &str,
        body: &EventCancel,
    ) -> ApiResult<Payload> {
        write(self.transport, &CANCEL_EVENT, &[user_id, event_id], body).await
    }

    pub async fn forward_event(
        &self,
        user_id: &str,
        event_id: &str,
        body: &EventForward,
    ) -> ApiResult<Payload> {
        write(self.transport, &FORWARD_EVENT, &[user_id, event_id], body).await
    }

    pub async fn dismiss_reminder(&self, user_id: &str, event_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DISMISS_REMINDER, &[user_id, event_id]).await
    }

    pub async fn snooze_reminder(
        &self,
        user_id: &str,
        event_id: &str,
        body: &SnoozeReminder,
    ) -> ApiResult<Payload> {
        write(self.transport, &SNOOZE_REMINDER, &[user_id, event_id], body).await
    }

    pub async fn permanent_delete_event(&self, user_id: &str, event_id: &str) -> ApiResult<Payload> {
        action(self.transport, &PERMANENT_DELETE_EVENT, &[user_id, event_id]).await
    }

    // ---- event attachments ----

    pub async fn list_event_attachments(
        &self,
        user_id: &str,
        event_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_EVENT_ATTACHMENTS, &[user_id, event_id], query).await
    }

    pub async fn create_event_attachment(
        &self,
        user_id: &str,
        event_id: &str,
        body: &Attachment,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_EVENT_ATTACHMENT, &[user_id, event_id], body).await
    }

    pub async fn get_event_attachment_count(
        &self,
        user_id: &str,
        event_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_EVENT_ATTACHMENT_COUNT, &[user_id, event_id], query).await
    }

    pub async fn get_event_attachment(
        &self,
        user_id: &str,
        event_id: &str,
        attachment_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, event_id, attachment_id];
        read(self.transport, &GET_EVENT_ATTACHMENT, &ids, query).await
    }

    pub async fn delete_event_attachment(
        &self,
        user_id: &str,
        event_id: &str,
        attachment_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, event_id, attachment_id];
        action(self.transport, &DELETE_EVENT_ATTACHMENT, &ids).await
    }

    pub async fn create_event_attachment_upload_session(
        &self,
        user_id: &str,
        event_id: &str,
        body: &UploadSessionRequest,
    ) -> ApiResult<Payload> {
        let ids = [user_id, event_id];
        write(self.transport, &CREATE_EVENT_ATTACHMENT_UPLOAD_SESSION, &ids, body).await
    }

    // ---- scheduling ----

    pub async fn find_meeting_times(&self, user_id: &str, body: &FindMeetingTimes) -> ApiResult<Payload> {
        write(self.transport, &FIND_MEETING_TIMES, &[user_id], body).await
    }

    /// Reminders due between two instants. The window lives in the path,
    /// not the query string.
    pub async fn reminder_view(
        &self,
        user_id: &str,
        start_date_time: &str,
        end_date_time: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, start_date_time, end_date_time];
        read(self.transport, &REMINDER_VIEW, &ids, query).await
    }
}
