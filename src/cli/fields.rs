//
//  graph-client
//  cli/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `key=value` field parsing shared by `call` and `api`.
//!
//! `-F` values are typed (`true`, `42`, `[..]`, `{..}`); `--raw-field` values
//! stay strings. Dotted keys build nested objects:
//! `-F body.contentType=text` becomes `{"body": {"contentType": "text"}}`.

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// Parses `key=value`, inferring the JSON type of the value.
pub fn parse_field(field: &str) -> Result<(String, Value)> {
    let (key, raw) = split_field(field)?;

    let value = match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    };

    Ok((key.to_string(), value))
}

/// Parses `key=value` keeping the value as text.
pub fn parse_raw_field(field: &str) -> Result<(String, String)> {
    let (key, value) = split_field(field)?;
    Ok((key.to_string(), value.to_string()))
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Inserts `value` at a dotted key path, creating objects on the way.
pub fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

/// Reads a file, or stdin for `-`.
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read(path).with_context(|| format!("Failed to read {path}"))
}

/// Builds a JSON body from an input file or from fields.
///
/// Fields are layered over the file's object when both are given.
///
/// # Returns
///
/// `None` when neither was supplied.
pub fn build_json_body(
    input: Option<&str>,
    fields: &[String],
    raw_fields: &[String],
) -> Result<Option<Value>> {
    let mut body = match input {
        Some(path) => {
            let content = read_input(path)?;
            let value: Value = serde_json::from_slice(&content)
                .with_context(|| format!("{path} is not valid JSON"))?;
            if fields.is_empty() && raw_fields.is_empty() {
                return Ok(Some(value));
            }
            match value {
                Value::Object(map) => map,
                _ => bail!("Fields can only be combined with a JSON object input"),
            }
        }
        None if fields.is_empty() && raw_fields.is_empty() => return Ok(None),
        None => Map::new(),
    };

    for field in fields {
        let (key, value) = parse_field(field)?;
        set_nested_value(&mut body, &key, value);
    }
    for field in raw_fields {
        let (key, value) = parse_raw_field(field)?;
        set_nested_value(&mut body, &key, Value::String(value));
    }

    Ok(Some(Value::Object(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_field_types() {
        assert_eq!(parse_field("a=true").unwrap().1, json!(true));
        assert_eq!(parse_field("a=42").unwrap().1, json!(42));
        assert_eq!(parse_field("a=1.5").unwrap().1, json!(1.5));
        assert_eq!(parse_field("a=null").unwrap().1, Value::Null);
        assert_eq!(parse_field("a=[\"x\"]").unwrap().1, json!(["x"]));
        assert_eq!(parse_field("a=hello").unwrap().1, json!("hello"));
        assert_eq!(parse_field("a=x=y").unwrap().1, json!("x=y"));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=1").is_err());
    }

    #[test]
    fn test_raw_field_stays_text() {
        assert_eq!(parse_raw_field("a=42").unwrap(), ("a".into(), "42".into()));
    }

    #[test]
    fn test_set_nested_value() {
        let mut body = Map::new();
        set_nested_value(&mut body, "body.contentType", json!("text"));
        set_nested_value(&mut body, "body.content", json!("Hi"));
        set_nested_value(&mut body, "subject", json!("Lunch"));
        assert_eq!(
            Value::Object(body),
            json!({"body": {"contentType": "text", "content": "Hi"}, "subject": "Lunch"})
        );
    }

    #[test]
    fn test_build_body_from_fields() {
        let body = build_json_body(
            None,
            &["isRead=true".to_string()],
            &["categories=42".to_string()],
        )
        .unwrap();
        assert_eq!(body, Some(json!({"isRead": true, "categories": "42"})));
        assert_eq!(build_json_body(None, &[], &[]).unwrap(), None);
    }

    #[test]
    fn test_build_body_layers_fields_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"subject": "Draft", "isRead": false}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let body = build_json_body(Some(&path), &["isRead=true".to_string()], &[]).unwrap();
        assert_eq!(body, Some(json!({"subject": "Draft", "isRead": true})));
    }
}
