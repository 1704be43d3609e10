//
//  graph-client
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! OData query options.
//!
//! [`QueryParam`] names one option and knows its wire name. Each endpoint
//! declares the ordered list of options it accepts; [`QueryOptions`] holds
//! the values a caller supplied. Only supplied options in the endpoint's
//! list reach the wire, in the endpoint's order.

use std::fmt;

use serde::Serialize;

use super::common::ApiError;
use super::request::{QueryPairs, QueryValue};

/// A query option understood by at least one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryParam {
    Top,
    Skip,
    Search,
    Filter,
    Count,
    OrderBy,
    Select,
    Expand,
    IncludeHiddenFolders,
    IncludeHiddenMessages,
    ChangeType,
    StartDateTime,
    EndDateTime,
    DeltaToken,
    SkipToken,
}

impl QueryParam {
    /// Every option, in canonical order.
    pub const ALL: &'static [QueryParam] = &[
        Self::Top,
        Self::Skip,
        Self::Search,
        Self::Filter,
        Self::Count,
        Self::OrderBy,
        Self::Select,
        Self::Expand,
        Self::IncludeHiddenFolders,
        Self::IncludeHiddenMessages,
        Self::ChangeType,
        Self::StartDateTime,
        Self::EndDateTime,
        Self::DeltaToken,
        Self::SkipToken,
    ];

    /// The name used in the query string.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Top => "$top",
            Self::Skip => "$skip",
            Self::Search => "$search",
            Self::Filter => "$filter",
            Self::Count => "$count",
            Self::OrderBy => "$orderby",
            Self::Select => "$select",
            Self::Expand => "$expand",
            Self::IncludeHiddenFolders => "includeHiddenFolders",
            Self::IncludeHiddenMessages => "includeHiddenMessages",
            Self::ChangeType => "changeType",
            Self::StartDateTime => "startDateTime",
            Self::EndDateTime => "endDateTime",
            Self::DeltaToken => "$deltatoken",
            Self::SkipToken => "$skiptoken",
        }
    }

    /// The snake_case name used by the CLI and in code.
    pub const fn local_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Skip => "skip",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Count => "count",
            Self::OrderBy => "orderby",
            Self::Select => "select",
            Self::Expand => "expand",
            Self::IncludeHiddenFolders => "include_hidden_folders",
            Self::IncludeHiddenMessages => "include_hidden_messages",
            Self::ChangeType => "change_type",
            Self::StartDateTime => "start_date_time",
            Self::EndDateTime => "end_date_time",
            Self::DeltaToken => "delta_token",
            Self::SkipToken => "skip_token",
        }
    }

    /// Looks an option up by wire name or local name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_client::api::QueryParam;
    ///
    /// assert_eq!(QueryParam::from_name("$top"), Some(QueryParam::Top));
    /// assert_eq!(QueryParam::from_name("top"), Some(QueryParam::Top));
    /// assert_eq!(QueryParam::from_name("changeType"), Some(QueryParam::ChangeType));
    /// assert_eq!(QueryParam::from_name("limit"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.wire_name() == name || p.local_name() == name)
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

use QueryParam::*;

/// Collection reads: paging, search, filter, count, sort, projection.
pub const LIST: &[QueryParam] = &[Top, Skip, Search, Filter, Count, OrderBy, Select, Expand];
/// Single entity reads.
pub const GET: &[QueryParam] = &[Select, Expand];
/// `/$count` reads.
pub const COUNT: &[QueryParam] = &[Search, Filter];
/// `delta()` reads.
pub const DELTA: &[QueryParam] = &[
    Top, Skip, Search, Filter, Count, OrderBy, Select, Expand, ChangeType, DeltaToken, SkipToken,
];
/// Mail folder collection reads.
pub const FOLDER_LIST: &[QueryParam] = &[
    IncludeHiddenFolders, Top, Skip, Search, Filter, Count, OrderBy, Select, Expand,
];
/// Mail folder entity reads.
pub const FOLDER_GET: &[QueryParam] = &[IncludeHiddenMessages, Select, Expand];
/// Message collection reads.
pub const MESSAGE_LIST: &[QueryParam] = &[
    IncludeHiddenMessages, Top, Skip, Search, Filter, Count, OrderBy, Select, Expand,
];
/// Message entity reads.
pub const MESSAGE_GET: &[QueryParam] = &[IncludeHiddenMessages, Select, Expand];
/// `calendarView` reads: the window is mandatory on the wire.
pub const CALENDAR_VIEW: &[QueryParam] = &[
    StartDateTime, EndDateTime, Top, Skip, Filter, Count, OrderBy, Select, Expand,
];
/// `calendarView/$count` reads.
pub const CALENDAR_VIEW_COUNT: &[QueryParam] = &[StartDateTime, EndDateTime, Search, Filter];
/// `calendarView/delta()` reads.
pub const CALENDAR_VIEW_DELTA: &[QueryParam] = &[
    StartDateTime, EndDateTime, Top, Skip, Filter, Count, OrderBy, Select, Expand, DeltaToken,
    SkipToken,
];
/// Event instance reads.
pub const INSTANCES: &[QueryParam] = &[StartDateTime, EndDateTime, Select];

/// Optional query values for one call.
///
/// Every field is `None` unless supplied; unset fields never reach the wire.
///
/// # Example
///
/// ```rust
/// use graph_client::api::{query, QueryOptions};
///
/// let options = QueryOptions::new().top(10).select(["subject", "from"]);
/// let pairs = options.pairs_for(query::LIST);
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].0, "$top");
/// assert_eq!(pairs[1].1.to_wire(), "subject,from");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub top: Option<i64>,
    pub skip: Option<i64>,
    pub search: Option<String>,
    pub filter: Option<String>,
    pub count: Option<bool>,
    pub orderby: Option<Vec<String>>,
    pub select: Option<Vec<String>>,
    pub expand: Option<Vec<String>>,
    pub include_hidden_folders: Option<String>,
    pub include_hidden_messages: Option<String>,
    pub change_type: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub delta_token: Option<String>,
    pub skip_token: Option<String>,
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, top: i64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn orderby<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = Some(strings(fields));
        self
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(strings(fields));
        self
    }

    pub fn expand<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = Some(strings(fields));
        self
    }

    pub fn include_hidden_folders(mut self, value: impl Into<String>) -> Self {
        self.include_hidden_folders = Some(value.into());
        self
    }

    pub fn include_hidden_messages(mut self, value: impl Into<String>) -> Self {
        self.include_hidden_messages = Some(value.into());
        self
    }

    pub fn change_type(mut self, value: impl Into<String>) -> Self {
        self.change_type = Some(value.into());
        self
    }

    /// Sets both ends of a `calendarView` window (ISO 8601).
    pub fn window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date_time = Some(start.into());
        self.end_date_time = Some(end.into());
        self
    }

    pub fn delta_token(mut self, token: impl Into<String>) -> Self {
        self.delta_token = Some(token.into());
        self
    }

    pub fn skip_token(mut self, token: impl Into<String>) -> Self {
        self.skip_token = Some(token.into());
        self
    }

    /// Returns the supplied value for one option.
    pub fn value(&self, param: QueryParam) -> Option<QueryValue> {
        let text = |v: &Option<String>| v.clone().map(QueryValue::Text);
        let list = |v: &Option<Vec<String>>| v.clone().map(QueryValue::List);
        match param {
            Top => self.top.map(QueryValue::Integer),
            Skip => self.skip.map(QueryValue::Integer),
            Search => text(&self.search),
            Filter => text(&self.filter),
            Count => self.count.map(QueryValue::Flag),
            OrderBy => list(&self.orderby),
            Select => list(&self.select),
            Expand => list(&self.expand),
            IncludeHiddenFolders => text(&self.include_hidden_folders),
            IncludeHiddenMessages => text(&self.include_hidden_messages),
            ChangeType => text(&self.change_type),
            StartDateTime => text(&self.start_date_time),
            EndDateTime => text(&self.end_date_time),
            DeltaToken => text(&self.delta_token),
            SkipToken => text(&self.skip_token),
        }
    }

    /// Builds the wire pairs for an endpoint's accepted options.
    ///
    /// Iterates `accepted` in order and keeps only supplied values.
    pub fn pairs_for(&self, accepted: &[QueryParam]) -> QueryPairs {
        accepted
            .iter()
            .filter_map(|param| {
                self.value(*param)
                    .map(|value| (param.wire_name().to_string(), value))
            })
            .collect()
    }

    /// Lists every option that has a value.
    pub fn supplied(&self) -> Vec<QueryParam> {
        QueryParam::ALL
            .iter()
            .copied()
            .filter(|param| self.value(*param).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.supplied().is_empty()
    }

    /// Sets an option from its textual form (used by the CLI).
    ///
    /// Integers and booleans are parsed; list options are split on commas.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidQuery`] for unknown names and unparsable values.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        let invalid = || ApiError::InvalidQuery {
            name: name.to_string(),
            value: value.to_string(),
        };
        let param = QueryParam::from_name(name).ok_or_else(invalid)?;
        let list = || {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        match param {
            Top => self.top = Some(value.parse().map_err(|_| invalid())?),
            Skip => self.skip = Some(value.parse().map_err(|_| invalid())?),
            Count => self.count = Some(value.parse().map_err(|_| invalid())?),
            Search => self.search = Some(value.to_string()),
            Filter => self.filter = Some(value.to_string()),
            OrderBy => self.orderby = Some(list()),
            Select => self.select = Some(list()),
            Expand => self.expand = Some(list()),
            IncludeHiddenFolders => self.include_hidden_folders = Some(value.to_string()),
            IncludeHiddenMessages => self.include_hidden_messages = Some(value.to_string()),
            ChangeType => self.change_type = Some(value.to_string()),
            StartDateTime => self.start_date_time = Some(value.to_string()),
            EndDateTime => self.end_date_time = Some(value.to_string()),
            DeltaToken => self.delta_token = Some(value.to_string()),
            SkipToken => self.skip_token = Some(value.to_string()),
        }
        Ok(())
    }
}
