//
//  graph-client
//  cli/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named endpoint invocation
//!
//! ## Examples
//!
//! ```bash
//! # Count unread messages (user_id comes from `default_user` when omitted)
//! graph call mail.get_message_count -q filter="isRead eq false"
//!
//! # Path ids by name or by position
//! graph call mail.get_folder_message -p mail_folder_id=inbox -p message_id=AAMk...
//! graph call places.get_room_list_room bldg1@contoso.com room7@contoso.com
//!
//! # Bodies from fields or a file
//! graph call places.update_place p1 -F displayName="Room A" -F capacity=12
//! graph call mail.send_mail -f message.json
//!
//! # Raw MIME content
//! graph call mail.get_message_content u1 m1 -o message.eml
//! graph call mail.update_message_content u1 m1 --content message.eml
//! ```

use std::fs;

use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;
use tracing::debug;

use crate::api::registry;
use crate::api::{
    dispatch, ApiResult, Collection, Endpoint, PathArgs, Payload, QueryOptions, RequestBody,
    ResponseShape, Transport,
};
use crate::config::Config;
use crate::output::{select_field, OutputWriter};

use super::fields::{build_json_body, read_input};
use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct CallCommand {
    /// Endpoint name, qualified (`mail.get_message`) or bare when unambiguous
    pub endpoint: String,

    /// Path identifiers in path order; named ones (-p) are skipped
    pub ids: Vec<String>,

    /// Path parameter as name=value
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Query option as name=value (top, filter, select, $orderby, ...)
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Typed body field key=value (dotted keys nest)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// String body field key=value
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the JSON body from a file ('-' for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    /// Upload a file as raw content ('-' for stdin)
    #[arg(long, conflicts_with_all = ["input", "field", "raw_field"])]
    pub content: Option<String>,

    /// Write the response body to a file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Follow @odata.nextLink and merge all pages
    #[arg(long)]
    pub paginate: bool,

    /// Print only one field, e.g. .value[0].id
    #[arg(long)]
    pub extract: Option<String>,
}

impl CallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let endpoint = registry::find(&self.endpoint)?;

        let values = self.path_values(endpoint, &config)?;
        let mut args = PathArgs::new();
        for (name, value) in &values {
            args.insert(name, value.as_str());
        }

        let mut query = QueryOptions::new();
        for option in &self.query {
            let Some((name, value)) = option.split_once('=') else {
                bail!("Invalid query option: {option}. Expected name=value");
            };
            query.set(name.trim(), value)?;
        }

        let body = self.body()?;
        let client = global.client(&config)?;

        debug!(endpoint = %endpoint.qualified_name(), "calling endpoint");
        let mut payload = dispatch(&client, endpoint, &args, &query, body).await?;
        if self.paginate {
            payload = follow_pages(&client, payload).await?;
        }

        let writer = global.writer(&config)?;
        emit(&writer, endpoint.response, payload, self.extract.as_deref(), self.output.as_deref())
    }

    /// Resolves path values: `-p` first, then positionals in path order,
    /// then `default_user` for a still-missing `user_id`.
    fn path_values(&self, endpoint: &Endpoint, config: &Config) -> Result<Vec<(&'static str, String)>> {
        let names = endpoint.path_params();
        let mut values: Vec<(&'static str, String)> = Vec::new();

        for param in &self.params {
            let Some((name, value)) = param.split_once('=') else {
                bail!("Invalid parameter: {param}. Expected name=value");
            };
            let Some(name) = names.iter().copied().find(|n| *n == name.trim()) else {
                bail!(
                    "{} has no path parameter '{}'. Parameters: {}",
                    endpoint.qualified_name(),
                    name.trim(),
                    names.join(", ")
                );
            };
            values.push((name, value.to_string()));
        }

        let unnamed: Vec<&'static str> = names
            .iter()
            .copied()
            .filter(|n| !values.iter().any(|(v, _)| v == n))
            .collect();

        let mut unnamed = unnamed.into_iter().peekable();
        if unnamed.peek() == Some(&"user_id") && self.ids.len() < names.len().saturating_sub(values.len()) {
            if let Some(user) = &config.api.default_user {
                unnamed.next();
                values.push(("user_id", user.clone()));
            }
        }

        let mut ids = self.ids.iter();
        for name in unnamed {
            match ids.next() {
                Some(id) => values.push((name, id.clone())),
                None => break,
            }
        }
        if ids.next().is_some() {
            bail!(
                "Too many identifiers for {}. Parameters: {}",
                endpoint.qualified_name(),
                names.join(", ")
            );
        }

        Ok(values)
    }

    fn body(&self) -> Result<RequestBody> {
        if let Some(path) = &self.content {
            return Ok(RequestBody::octet_stream(read_input(path)?));
        }
        Ok(
            match build_json_body(self.input.as_deref(), &self.field, &self.raw_field)? {
                Some(value) => RequestBody::Json(value),
                None => RequestBody::Empty,
            },
        )
    }
}

/// Follows `@odata.nextLink` until the last page and merges the `value`
/// arrays. The last page's delta link is kept.
pub(super) async fn follow_pages(transport: &dyn Transport, first: Payload) -> ApiResult<Payload> {
    let value = match first {
        Payload::Json(value) if value.get("value").is_some_and(Value::is_array) => value,
        other => return Ok(other),
    };

    let mut page: Collection<Value> = serde_json::from_value(value)?;
    let mut items = std::mem::take(&mut page.value);
    let mut pages = 1;
    while let Some(next) = page.next_link.take() {
        debug!(page = pages + 1, "following next link");
        page = transport.get(&next, Vec::new()).await?.deserialize()?;
        items.append(&mut page.value);
        pages += 1;
    }

    page.value = items;
    Ok(Payload::Json(serde_json::to_value(page)?))
}

/// Writes a result to a file, as a single field, or through the writer.
pub(super) fn emit(
    writer: &OutputWriter,
    shape: ResponseShape,
    payload: Payload,
    extract: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    if let Some(path) = output {
        let bytes = match &payload {
            Payload::Json(value) => serde_json::to_vec_pretty(value)?,
            _ => payload.into_bytes()?,
        };
        fs::write(path, &bytes)?;
        writer.write_success(&format!("Wrote {} bytes to {path}", bytes.len()));
        return Ok(());
    }

    if shape == ResponseShape::Count {
        if let Ok(count) = payload.count() {
            println!("{count}");
            return Ok(());
        }
    }

    if let Some(path) = extract {
        let value = payload.into_json()?;
        return writer.write(select_field(&value, path)?);
    }

    writer.write_payload(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::testing::Recorder;
    use crate::api::RawResponse;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        call: CallCommand,
    }

    fn parse(args: &[&str]) -> CallCommand {
        let mut argv = vec!["graph"];
        argv.extend_from_slice(args);
        Harness::parse_from(argv).call
    }

    fn config_with_user(user: Option<&str>) -> Config {
        let mut config = Config::default();
        config.api.default_user = user.map(str::to_string);
        config
    }

    #[test]
    fn test_positional_ids_fill_in_order() {
        let cmd = parse(&["mail.get_folder_message", "u1", "inbox", "m1"]);
        let endpoint = registry::find(&cmd.endpoint).unwrap();
        let values = cmd.path_values(endpoint, &config_with_user(None)).unwrap();
        assert_eq!(
            values,
            vec![
                ("user_id", "u1".to_string()),
                ("mail_folder_id", "inbox".to_string()),
                ("message_id", "m1".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_user_fills_user_id() {
        let cmd = parse(&["mail.get_message", "m1"]);
        let endpoint = registry::find(&cmd.endpoint).unwrap();
        let values = cmd.path_values(endpoint, &config_with_user(Some("me@contoso.com"))).unwrap();
        assert_eq!(
            values,
            vec![("user_id", "me@contoso.com".to_string()), ("message_id", "m1".to_string())]
        );

        // all ids given explicitly: default_user is not used
        let cmd = parse(&["mail.get_message", "u2", "m1"]);
        let values = cmd.path_values(endpoint, &config_with_user(Some("me@contoso.com"))).unwrap();
        assert_eq!(values[0], ("user_id", "u2".to_string()));
    }

    #[test]
    fn test_named_params_and_errors() {
        let cmd = parse(&["mail.get_message", "-p", "message_id=m1", "u1"]);
        let endpoint = registry::find(&cmd.endpoint).unwrap();
        let values = cmd.path_values(endpoint, &config_with_user(None)).unwrap();
        assert_eq!(
            values,
            vec![("message_id", "m1".to_string()), ("user_id", "u1".to_string())]
        );

        let cmd = parse(&["mail.get_message", "-p", "folder=x"]);
        assert!(cmd.path_values(endpoint, &config_with_user(None)).is_err());

        let cmd = parse(&["mail.get_message", "u1", "m1", "extra"]);
        assert!(cmd.path_values(endpoint, &config_with_user(None)).is_err());
    }

    #[test]
    fn test_missing_ids_are_left_for_dispatch() {
        let cmd = parse(&["places.update_place"]);
        let endpoint = registry::find(&cmd.endpoint).unwrap();
        assert!(cmd.path_values(endpoint, &config_with_user(None)).unwrap().is_empty());
    }

    #[test]
    fn test_body_modes() {
        let cmd = parse(&["places.update_place", "p1", "-F", "capacity=12"]);
        assert_eq!(cmd.body().unwrap(), RequestBody::Json(json!({"capacity": 12})));

        let cmd = parse(&["places.delete_place", "p1"]);
        assert_eq!(cmd.body().unwrap(), RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_follow_pages_merges_values() {
        let recorder = Recorder::new()
            .respond(RawResponse::json(&json!({
                "value": [{"id": "2"}],
                "@odata.nextLink": "https://graph.microsoft.com/v1.0/places/microsoft.graph.room?$skiptoken=B"
            })))
            .respond(RawResponse::json(&json!({"value": [{"id": "3"}]})));

        let first = Payload::Json(json!({
            "value": [{"id": "1"}],
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/places/microsoft.graph.room?$skiptoken=A"
        }));
        let merged = follow_pages(&recorder, first).await.unwrap();
        assert_eq!(
            merged.into_json().unwrap(),
            json!({"value": [{"id": "1"}, {"id": "2"}, {"id": "3"}]})
        );
        assert_eq!(recorder.calls(), 2);
        assert!(recorder.last().path.ends_with("$skiptoken=B"));
    }

    #[tokio::test]
    async fn test_follow_pages_leaves_entities_alone() {
        let recorder = Recorder::new();
        let entity = Payload::Json(json!({"id": "m1"}));
        assert_eq!(follow_pages(&recorder, entity.clone()).await.unwrap(), entity);
        assert_eq!(recorder.calls(), 0);
    }
}
