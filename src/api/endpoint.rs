//
//  graph-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Descriptors
//!
//! Every Graph endpoint the client binds is a `const` [`Endpoint`] value:
//! its name, owning segment, verb, path template, accepted query options,
//! body mode and response shape. The descriptors are plain data; one
//! generic [`dispatch`](super::dispatch::dispatch) executes all of them.
//!
//! ## Path Templates
//!
//! Templates name their parameters in braces:
//!
//! ```text
//! /users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/$value
//! ```
//!
//! The required path parameters are exactly the placeholders, in order of
//! appearance. Values are substituted verbatim; escaping is left to the
//! HTTP layer.
//!
//! ## Declaring an Endpoint
//!
//! ```rust
//! use graph_client::api::{query, Endpoint, ResponseShape, Segment};
//!
//! const LIST_ROOMS: Endpoint = Endpoint::get(Segment::Places, "list_rooms", "/places/microsoft.graph.room")
//!     .query(query::LIST)
//!     .returns(ResponseShape::Collection)
//!     .summary("List rooms in the tenant");
//!
//! assert!(LIST_ROOMS.path_params().is_empty());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::common::{ApiError, ApiResult};
use super::query::QueryParam;
use super::request::Verb;

/// Resource families, one segment type each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Places,
    #[serde(rename = "mail")]
    UserMail,
    #[serde(rename = "calendar")]
    UserCalendar,
}

impl Segment {
    pub const ALL: &'static [Segment] = &[Self::Places, Self::UserMail, Self::UserCalendar];

    /// Short name used in qualified endpoint names and by the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::UserMail => "mail",
            Self::UserCalendar => "calendar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of request body an endpoint takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    /// No body.
    None,
    /// A JSON document.
    Json,
    /// Raw bytes (`application/octet-stream`).
    Bytes,
}

impl BodyMode {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::None => "no request body",
            Self::Json => "a JSON request body",
            Self::Bytes => "a raw byte request body",
        }
    }
}

/// The shape of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// A single JSON object.
    Entity,
    /// A `value` collection wrapper.
    Collection,
    /// A `$count` integer.
    Count,
    /// Raw content.
    Bytes,
    /// No body.
    Empty,
}

/// A static description of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Stable name, unique within the segment (e.g. `update_place`).
    pub name: &'static str,
    pub segment: Segment,
    pub verb: Verb,
    /// Path template relative to the base URL.
    pub path: &'static str,
    /// Accepted query options, in wire order.
    pub query: &'static [QueryParam],
    pub body: BodyMode,
    pub response: ResponseShape,
    /// One line description.
    pub summary: &'static str,
}

impl Endpoint {
    /// Creates a descriptor with the defaults for its verb.
    ///
    /// | Verb | Body | Response |
    /// |------|------|----------|
    /// | GET | none | entity |
    /// | POST | JSON | entity |
    /// | PATCH | JSON | entity |
    /// | PUT | bytes | empty |
    /// | DELETE | none | empty |
    pub const fn new(segment: Segment, name: &'static str, verb: Verb, path: &'static str) -> Self {
        let (body, response) = match verb {
            Verb::Get => (BodyMode::None, ResponseShape::Entity),
            Verb::Post | Verb::Patch => (BodyMode::Json, ResponseShape::Entity),
            Verb::Put => (BodyMode::Bytes, ResponseShape::Empty),
            Verb::Delete => (BodyMode::None, ResponseShape::Empty),
        };
        Self {
            name,
            segment,
            verb,
            path,
            query: &[],
            body,
            response,
            summary: "",
        }
    }

    pub const fn get(segment: Segment, name: &'static str, path: &'static str) -> Self {
        Self::new(segment, name, Verb::Get, path)
    }

    pub const fn post(segment: Segment, name: &'static str, path: &'static str) -> Self {
        Self::new(segment, name, Verb::Post, path)
    }

    pub const fn put(segment: Segment, name: &'static str, path: &'static str) -> Self {
        Self::new(segment, name, Verb::Put, path)
    }

    pub const fn patch(segment: Segment, name: &'static str, path: &'static str) -> Self {
        Self::new(segment, name, Verb::Patch, path)
    }

    pub const fn delete(segment: Segment, name: &'static str, path: &'static str) -> Self {
        Self::new(segment, name, Verb::Delete, path)
    }

    pub const fn query(self, query: &'static [QueryParam]) -> Self {
        Self { query, ..self }
    }

    pub const fn body(self, body: BodyMode) -> Self {
        Self { body, ..self }
    }

    pub const fn returns(self, response: ResponseShape) -> Self {
        Self { response, ..self }
    }

    pub const fn summary(self, summary: &'static str) -> Self {
        Self { summary, ..self }
    }

    /// `segment.name`, e.g. `places.update_place`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.segment.name(), self.name)
    }

    /// The required path parameters, in order of appearance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::segments::mail;
    ///
    /// assert_eq!(
    ///     mail::GET_FOLDER_MESSAGE.path_params(),
    ///     vec!["user_id", "mail_folder_id", "message_id"]
    /// );
    /// ```
    pub fn path_params(&self) -> Vec<&'static str> {
        placeholders(self.path).map(|(_, name)| name).collect()
    }

    /// Returns `true` if the endpoint accepts this query option.
    pub fn accepts(&self, param: QueryParam) -> bool {
        self.query.contains(&param)
    }

    /// Substitutes path arguments into the template.
    ///
    /// Parameters are checked in order of appearance. An absent, empty or
    /// whitespace-only value is missing.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingParameter`] naming the first missing parameter.
    pub fn render_path(&self, args: &PathArgs<'_>) -> ApiResult<String> {
        let mut rendered = String::with_capacity(self.path.len() + 32);
        let mut rest = self.path;

        for (start, name) in placeholders(self.path) {
            let value = args
                .get(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ApiError::MissingParameter {
                    name: name.to_string(),
                })?;

            let offset = self.path.len() - rest.len();
            rendered.push_str(&rest[..start - offset]);
            rendered.push_str(value);
            rest = &self.path[start + name.len() + 2..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

/// Iterates `(byte offset of '{', name)` for each placeholder.
fn placeholders(template: &'static str) -> impl Iterator<Item = (usize, &'static str)> {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        let open = cursor + template[cursor..].find('{')?;
        let close = open + template[open..].find('}')?;
        cursor = close + 1;
        Some((open, &template[open + 1..close]))
    })
}

/// Named path arguments for one call.
///
/// # Example
///
/// ```rust
/// use graph_client::api::PathArgs;
///
/// let args = PathArgs::new().with("user_id", "u1").with("message_id", "m1");
/// assert_eq!(args.get("user_id"), Some("u1"));
/// assert_eq!(args.get("event_id"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs<'a> {
    values: HashMap<&'a str, &'a str>,
}

impl<'a> PathArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'a str, value: &'a str) -> Self {
        self.values.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'a str, value: &'a str) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Pairs values with an endpoint's parameters in declaration order.
    ///
    /// Extra values are ignored; missing ones are reported at render time.
    pub fn positional(endpoint: &Endpoint, values: &[&'a str]) -> Self {
        let mut args = Self::new();
        for (name, value) in endpoint.path_params().into_iter().zip(values) {
            args.insert(name, value);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE_VALUE: Endpoint = Endpoint::get(
        Segment::UserMail,
        "get_message_content",
        "/users/{user_id}/messages/{message_id}/$value",
    )
    .returns(ResponseShape::Bytes);

    const REMINDERS: Endpoint = Endpoint::get(
        Segment::UserCalendar,
        "reminder_view",
        "/users/{user_id}/microsoft.graph.reminderView(StartDateTime='{start_date_time}',EndDateTime='{end_date_time}')",
    );

    #[test]
    fn test_verb_defaults() {
        let put = Endpoint::put(Segment::UserMail, "x", "/x");
        assert_eq!(put.body, BodyMode::Bytes);
        assert_eq!(put.response, ResponseShape::Empty);
        let post = Endpoint::post(Segment::UserMail, "x", "/x");
        assert_eq!(post.body, BodyMode::Json);
        assert_eq!(MESSAGE_VALUE.body, BodyMode::None);
        assert_eq!(MESSAGE_VALUE.response, ResponseShape::Bytes);
    }

    #[test]
    fn test_path_params_in_template_order() {
        assert_eq!(MESSAGE_VALUE.path_params(), vec!["user_id", "message_id"]);
        assert_eq!(
            REMINDERS.path_params(),
            vec!["user_id", "start_date_time", "end_date_time"]
        );
    }

    #[test]
    fn test_render_substitutes_verbatim() {
        let args = PathArgs::new().with("user_id", "u1").with("message_id", "AAMk=/+");
        assert_eq!(
            MESSAGE_VALUE.render_path(&args).unwrap(),
            "/users/u1/messages/AAMk=/+/$value"
        );

        let args = PathArgs::positional(&REMINDERS, &["u1", "2026-01-01T00:00:00", "2026-01-02T00:00:00"]);
        assert_eq!(
            REMINDERS.render_path(&args).unwrap(),
            "/users/u1/microsoft.graph.reminderView(StartDateTime='2026-01-01T00:00:00',EndDateTime='2026-01-02T00:00:00')"
        );
    }

    #[test]
    fn test_render_reports_first_missing_parameter() {
        let err = MESSAGE_VALUE.render_path(&PathArgs::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "user_id"));

        let args = PathArgs::new().with("user_id", "u1").with("message_id", "   ");
        let err = MESSAGE_VALUE.render_path(&args).unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "message_id"));
    }

    #[test]
    fn test_qualified_name_and_accepts() {
        assert_eq!(MESSAGE_VALUE.qualified_name(), "mail.get_message_content");
        assert!(!MESSAGE_VALUE.accepts(QueryParam::Top));
        let listed = MESSAGE_VALUE.query(&[QueryParam::Top]);
        assert!(listed.accepts(QueryParam::Top));
    }

    #[test]
    fn test_segment_names() {
        assert_eq!(Segment::from_name("mail"), Some(Segment::UserMail));
        assert_eq!(Segment::UserCalendar.to_string(), "calendar");
        assert_eq!(Segment::from_name("files"), None);
    }
}
