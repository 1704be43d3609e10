//
//  graph-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends a request to any path under the service root, for endpoints the
//! named table does not cover or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! graph api /me
//! graph api /users/u1/messages -q '$top=5' -q '$select=subject'
//! graph api -X PATCH /places/p1 -F capacity=12
//! graph api /users/u1/messages --paginate --extract '.value'
//! ```

use anyhow::{bail, Result};
use clap::Args;
use console::style;

use crate::api::{QueryValue, Request, RequestBody, ResponseShape, Transport, Verb};
use crate::config::Config;

use super::call::{emit, follow_pages};
use super::fields::{build_json_body, read_input};
use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to the service root, or an absolute URL
    pub path: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Query pair sent verbatim, e.g. '$top=5'
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

    /// Print the status line and content type before the body
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Print nothing on success
    #[arg(long)]
    pub silent: bool,

    /// Follow @odata.nextLink and merge all pages
    #[arg(long)]
    pub paginate: bool,

    /// Print only one field, e.g. .value[0].id
    #[arg(long)]
    pub extract: Option<String>,

    /// Write the response body to a file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let request = self.build_request()?;
        let client = global.client(&config)?;

        let raw = client.execute(request).await?;
        if self.include {
            println!("{} {}", style("HTTP").dim(), raw.status);
            if let Some(content_type) = &raw.content_type {
                println!("content-type: {content_type}");
            }
            println!();
        }

        let mut payload = client.normalize(raw)?;
        if self.silent {
            return Ok(());
        }
        if self.paginate {
            payload = follow_pages(&client, payload).await?;
        }

        let writer = global.writer(&config)?;
        emit(
            &writer,
            ResponseShape::Entity,
            payload,
            self.extract.as_deref(),
            self.output.as_deref(),
        )
    }

    fn build_request(&self) -> Result<Request> {
        let Some(method) = Verb::parse(&self.method) else {
            bail!("Unsupported HTTP method: {}", self.method);
        };

        let mut query = Vec::new();
        for pair in &self.query {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("Invalid query pair: {pair}. Expected key=value");
            };
            query.push((key.to_string(), QueryValue::Text(value.to_string())));
        }

        let body = match &self.content {
            Some(path) => RequestBody::octet_stream(read_input(path)?),
            None => match build_json_body(self.input.as_deref(), &self.field, &self.raw_field)? {
                Some(value) => RequestBody::Json(value),
                None => RequestBody::Empty,
            },
        };

        Ok(Request::new(method, self.path.clone())
            .with_query(query)
            .with_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        api: ApiCommand,
    }

    fn parse(args: &[&str]) -> ApiCommand {
        let mut argv = vec!["graph"];
        argv.extend_from_slice(args);
        Harness::parse_from(argv).api
    }

    #[test]
    fn test_build_request_defaults_to_get() {
        let request = parse(&["/me"]).build_request().unwrap();
        assert_eq!(request.method, Verb::Get);
        assert_eq!(request.path, "/me");
        assert!(request.query.is_empty());
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_build_request_with_query_and_fields() {
        let request = parse(&[
            "-X", "patch", "/places/p1", "-q", "$select=id", "-F", "capacity=12",
        ])
        .build_request()
        .unwrap();
        assert_eq!(request.method, Verb::Patch);
        assert_eq!(
            request.query_value("$select"),
            Some(&QueryValue::Text("id".into()))
        );
        assert_eq!(request.body, RequestBody::Json(json!({"capacity": 12})));
    }

    #[test]
    fn test_build_request_rejects_unknown_method() {
        assert!(parse(&["-X", "TRACE", "/me"]).build_request().is_err());
        assert!(parse(&["-q", "novalue", "/me"]).build_request().is_err());
    }
}
