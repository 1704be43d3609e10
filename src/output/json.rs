//
//  graph-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON and YAML Output
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed JSON to stdout |
//! | [`write_json_to`] | Pretty-printed JSON to any writer |
//! | [`write_yaml`] | YAML to stdout |
//! | [`select_field`] | `.a.b[0]` style extraction |

use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Writes a value as pretty-printed JSON followed by a newline.
///
/// ```rust
/// use graph_client::output::write_json_to;
///
/// let mut buffer = Vec::new();
/// write_json_to(&mut buffer, &serde_json::json!({"key": "value"})).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().contains("\"key\": \"value\""));
/// ```
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_yaml<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(value)?;
    print!("{}", yaml);
    Ok(())
}

/// Extracts a nested field using a small path syntax: `.` for identity,
/// `.name`, `.value[0].id`, `.["@odata.nextLink"]`.
///
/// # Errors
///
/// Fails on malformed paths and on missing fields.
pub fn select_field<'a>(value: &'a Value, path: &str) -> anyhow::Result<&'a Value> {
    let path = path.trim();
    let Some(rest) = path.strip_prefix('.') else {
        anyhow::bail!("Field path must start with '.': {path}");
    };

    let mut current = value;
    for step in parse_path(rest)? {
        current = match step {
            Step::Key(key) => current.get(key.as_str()),
            Step::Index(index) => current.get(index),
        }
        .ok_or_else(|| anyhow::anyhow!("No field at {path}"))?;
    }
    Ok(current)
}

#[derive(Debug, PartialEq)]
enum Step {
    Key(String),
    Index(usize),
}

fn parse_path(path: &str) -> anyhow::Result<Vec<Step>> {
    let mut steps = Vec::new();
    let mut chars = path.chars().peekable();
    let mut key = String::new();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !key.is_empty() {
                    steps.push(Step::Key(std::mem::take(&mut key)));
                }
            }
            '[' => {
                if !key.is_empty() {
                    steps.push(Step::Key(std::mem::take(&mut key)));
                }
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                let inner = inner.trim();
                if let Some(quoted) = inner.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
                    steps.push(Step::Key(quoted.to_string()));
                } else {
                    let index = inner
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Invalid index [{inner}]"))?;
                    steps.push(Step::Index(index));
                }
            }
            other => key.push(other),
        }
    }
    if !key.is_empty() {
        steps.push(Step::Key(key));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_identity() {
        let value = json!({"name": "test"});
        assert_eq!(select_field(&value, ".").unwrap(), &value);
    }

    #[test]
    fn test_select_nested() {
        let value = json!({
            "value": [{"id": "a", "from": {"emailAddress": {"address": "x@contoso.com"}}}],
            "@odata.nextLink": "https://next"
        });
        assert_eq!(select_field(&value, ".value[0].id").unwrap(), "a");
        assert_eq!(
            select_field(&value, ".value[0].from.emailAddress.address").unwrap(),
            "x@contoso.com"
        );
        assert_eq!(
            select_field(&value, r#".["@odata.nextLink"]"#).unwrap(),
            "https://next"
        );
    }

    #[test]
    fn test_select_errors() {
        let value = json!({"a": 1});
        assert!(select_field(&value, "a").is_err());
        assert!(select_field(&value, ".b").is_err());
        assert!(select_field(&value, ".a[x]").is_err());
    }
}
