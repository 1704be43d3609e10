//
//  graph-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders command results for the terminal:
//!
//! - **Table format**: `value` collections as rows, entities as key/value pairs
//! - **JSON format**: pretty-printed, for piping into `jq`
//! - **YAML format**: for reading large nested documents
//!
//! ## Architecture
//!
//! - [`table`]: table helpers using `comfy_table`
//! - [`json`]: JSON and YAML writers using `serde_json` / `serde_yaml`
//!
//! Raw byte payloads (MIME content) bypass formatting and go to stdout
//! untouched.

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::api::Payload;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Table,
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["json", "yaml", "table"];

    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => anyhow::bail!(
                "Unknown output format '{other}'. Expected one of: {}",
                Self::NAMES.join(", ")
            ),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes results in one format, with color auto-detected for stderr notes.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes any serializable value. Table format falls back to a key/value
    /// rendering of its JSON form.
    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Yaml => write_yaml(value),
            OutputFormat::Table => {
                let value = serde_json::to_value(value)?;
                print_value_table(&value, self.color);
                Ok(())
            }
        }
    }

    /// Writes an endpoint result.
    ///
    /// # Behavior
    ///
    /// - `Json`: rendered in the chosen format
    /// - `Bytes`: copied to stdout verbatim
    /// - `Empty`: a success note on stderr, nothing on stdout
    pub fn write_payload(&self, payload: &Payload) -> anyhow::Result<()> {
        match payload {
            Payload::Json(value) => self.write(value),
            Payload::Bytes(bytes) => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(bytes)?;
                handle.flush()?;
                Ok(())
            }
            Payload::Empty => {
                self.write_success("Done (no content)");
                Ok(())
            }
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Success notes go to stderr so stdout stays machine-readable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }
}

/// Prints a table for a JSON value: rows for `value` collections and arrays,
/// key/value pairs for objects, the bare value otherwise.
pub fn print_value_table(value: &Value, color: bool) {
    match collection_items(value) {
        Some(items) => {
            println!("{}", collection_table(items, color));
            if let Some(next) = value.get("@odata.nextLink").and_then(Value::as_str) {
                eprintln!("more results: {next}");
            }
        }
        None => match value {
            Value::Object(_) => println!("{}", entity_table(value, color)),
            other => println!("{}", scalar_text(other)),
        },
    }
}

fn collection_items(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("value").and_then(Value::as_array).map(Vec::as_slice),
        _ => None,
    }
}
