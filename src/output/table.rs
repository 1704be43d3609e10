//
//  graph-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! `comfy_table` rendering for Graph documents. Collections pick their
//! columns from the scalar fields of the first few rows, preferring the
//! usual identifying fields.
//!
//! ```rust,ignore
//! use graph_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Segment", "Name"])
//!     .row(["mail", "get_message_count"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

/// Fields shown first when present.
const PREFERRED_COLUMNS: &[&str] = &[
    "id",
    "displayName",
    "name",
    "subject",
    "emailAddress",
    "receivedDateTime",
    "start",
    "end",
    "isRead",
];

const MAX_COLUMNS: usize = 6;
const SAMPLE_ROWS: usize = 20;
const MAX_CELL_WIDTH: usize = 48;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Headers are cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn build(self) -> Table {
        self.table
    }

    pub fn print(self) {
        println!("{}", self.table);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Table with one row per collection item.
pub fn collection_table(items: &[Value], color: bool) -> Table {
    let columns = pick_columns(items);
    let rows = items.iter().map(|item| {
        columns
            .iter()
            .map(|column| item.get(column.as_str()).map(cell_text).unwrap_or_default())
            .collect::<Vec<_>>()
    });
    TableBuilder::new()
        .color(color)
        .headers(columns.iter().cloned())
        .rows(rows)
        .build()
}

/// Two-column table of an object's top-level fields.
pub fn entity_table(value: &Value, color: bool) -> Table {
    let mut builder = TableBuilder::new().color(color).headers(["Field", "Value"]);
    if let Value::Object(map) = value {
        for (key, field) in map {
            builder = builder.row([key.clone(), cell_text(field)]);
        }
    }
    builder.build()
}

/// Plain text of a scalar; strings are unquoted.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::Object(map) => {
            // emailAddress, start/end and similar wrappers read better flattened
            match (map.get("address"), map.get("dateTime"), map.get("name")) {
                (Some(address), _, _) => scalar_text(address),
                (_, Some(date_time), _) => scalar_text(date_time),
                (_, _, Some(name)) => scalar_text(name),
                _ => value.to_string(),
            }
        }
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        other => scalar_text(other),
    };
    truncate(&text, MAX_CELL_WIDTH)
}

fn pick_columns(items: &[Value]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items.iter().take(SAMPLE_ROWS) {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !key.starts_with("@odata") && !seen.contains(key) {
                    seen.push(key.clone());
                }
            }
        }
    }

    let mut columns: Vec<String> = PREFERRED_COLUMNS
        .iter()
        .filter(|c| seen.iter().any(|s| s == *c))
        .map(|c| c.to_string())
        .collect();
    for key in seen {
        if columns.len() >= MAX_COLUMNS {
            break;
        }
        if !columns.contains(&key) {
            columns.push(key);
        }
    }
    columns.truncate(MAX_COLUMNS);
    columns
}

/// Truncates to `max` characters, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer subject line", 10), "a longe...");
    }

    #[test]
    fn test_pick_columns_prefers_identity_fields() {
        let items = vec![
            json!({"@odata.etag": "W/1", "bodyPreview": "..", "subject": "Hi", "id": "m1"}),
            json!({"importance": "high", "id": "m2"}),
        ];
        assert_eq!(pick_columns(&items), vec!["id", "subject", "bodyPreview", "importance"]);
    }

    #[test]
    fn test_cell_text_flattens_wrappers() {
        assert_eq!(
            cell_text(&json!({"emailAddress": {"address": "a@contoso.com"}})["emailAddress"]),
            "a@contoso.com"
        );
        assert_eq!(
            cell_text(&json!({"dateTime": "2026-03-16T09:00:00", "timeZone": "UTC"})),
            "2026-03-16T09:00:00"
        );
        assert_eq!(cell_text(&json!(["a", "b"])), "a, b");
        assert_eq!(cell_text(&json!(null)), "");
    }

    #[test]
    fn test_collection_table_renders_rows() {
        let items = vec![json!({"id": "r1", "displayName": "Adams"})];
        let rendered = collection_table(&items, false).to_string();
        assert!(rendered.contains("displayName"));
        assert!(rendered.contains("Adams"));
    }
}
