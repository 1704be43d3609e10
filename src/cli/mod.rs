//
//  graph-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod call;
mod completion;
mod config;
mod endpoints;
mod fields;

pub use api::ApiCommand;
pub use call::CallCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use endpoints::EndpointsCommand;
pub use fields::{build_json_body, parse_field, parse_raw_field, read_input, set_nested_value};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::GraphClient;
use crate::auth::{resolve_token, AuthCredential};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "graph",
    version,
    about = "Call Graph mail, calendar and places endpoints from the command line",
    long_about = "graph wraps the Graph REST surface for places, user mail and user calendars.\n\n\
                  Every endpoint is addressable by name with 'graph call', and any path can be \
                  reached directly with 'graph api'.",
    propagate_version = true,
    after_help = "Use 'graph <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format: json, yaml or table
    #[arg(long, global = true, env = "GRAPH_FORMAT")]
    pub format: Option<String>,

    /// Service root, e.g. https://graph.microsoft.com/beta
    #[arg(long, global = true, env = "GRAPH_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer access token
    #[arg(long, global = true, env = "GRAPH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Flags first, then configuration, then the JSON default.
    pub fn output_format(&self, config: &Config) -> Result<OutputFormat> {
        if self.json {
            return Ok(OutputFormat::Json);
        }
        match &self.format {
            Some(format) => format.parse(),
            None => config.output.format.parse(),
        }
    }

    pub fn writer(&self, config: &Config) -> Result<OutputWriter> {
        Ok(OutputWriter::new(self.output_format(config)?))
    }

    /// Builds a client from configuration with flag overrides applied.
    ///
    /// A missing token is not an error here; the service answers 401.
    pub fn client(&self, config: &Config) -> Result<GraphClient> {
        let mut api = config.api.clone();
        if let Some(base_url) = &self.base_url {
            api.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            api.timeout_secs = timeout;
        }

        let mut client = GraphClient::from_config(&api)?;
        match resolve_token(self.token.as_deref(), api.token_env.as_deref()) {
            Some(token) => client = client.with_auth(AuthCredential::bearer(token)),
            None => tracing::warn!("no access token configured; requests will be anonymous"),
        }
        Ok(client)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call an endpoint by name
    #[command(visible_alias = "c")]
    Call(CallCommand),

    /// Make a request to an arbitrary path
    Api(ApiCommand),

    /// List the known endpoints
    #[command(visible_alias = "ls")]
    Endpoints(EndpointsCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completions
    Completion(CompletionCommand),

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_precedence() {
        let mut config = Config::default();
        config.output.format = "table".into();

        let global = GlobalOptions::default();
        assert_eq!(global.output_format(&config).unwrap(), OutputFormat::Table);

        let global = GlobalOptions {
            format: Some("yaml".into()),
            ..Default::default()
        };
        assert_eq!(global.output_format(&config).unwrap(), OutputFormat::Yaml);

        let global = GlobalOptions {
            json: true,
            format: Some("yaml".into()),
            ..Default::default()
        };
        assert_eq!(global.output_format(&config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_client_applies_overrides() {
        let global = GlobalOptions {
            base_url: Some("http://127.0.0.1:9/v1.0/".into()),
            token: Some("abc".into()),
            ..Default::default()
        };
        let client = global.client(&Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1.0");
    }
}
