//
//  graph-client
//  cli/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint catalogue listing

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use crate::api::registry;
use crate::api::{Endpoint, Segment};
use crate::config::Config;
use crate::output::{OutputFormat, TableBuilder};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct EndpointsCommand {
    /// Only list one segment: places, mail or calendar
    #[arg(long, short = 's')]
    pub segment: Option<String>,

    /// Only list endpoints whose name contains this text
    pub filter: Option<String>,
}

/// Listing row: the descriptor plus its derived fields.
#[derive(Serialize)]
struct EndpointRow<'a> {
    qualified_name: String,
    #[serde(flatten)]
    endpoint: &'a Endpoint,
    path_params: Vec<&'static str>,
}

impl EndpointsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let endpoints = self.select()?;
        let writer = global.writer(&config)?;

        if writer.format() == OutputFormat::Table {
            TableBuilder::new()
                .headers(["Endpoint", "Method", "Path", "Summary"])
                .rows(endpoints.iter().map(|e| {
                    [
                        e.qualified_name(),
                        e.verb.to_string(),
                        e.path.to_string(),
                        e.summary.to_string(),
                    ]
                }))
                .print();
            return Ok(());
        }

        let rows: Vec<EndpointRow<'_>> = endpoints
            .iter()
            .map(|endpoint| EndpointRow {
                qualified_name: endpoint.qualified_name(),
                endpoint,
                path_params: endpoint.path_params(),
            })
            .collect();
        writer.write(&rows)
    }

    fn select(&self) -> Result<Vec<&'static Endpoint>> {
        let segment = match &self.segment {
            Some(name) => Some(Segment::from_name(name).ok_or_else(|| {
                anyhow!("Unknown segment '{name}'. Expected one of: places, mail, calendar")
            })?),
            None => None,
        };

        Ok(registry::all()
            .filter(|e| segment.map_or(true, |s| e.segment == s))
            .filter(|e| {
                self.filter
                    .as_deref()
                    .map_or(true, |text| e.name.contains(text))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(segment: Option<&str>, filter: Option<&str>) -> EndpointsCommand {
        EndpointsCommand {
            segment: segment.map(str::to_string),
            filter: filter.map(str::to_string),
        }
    }

    #[test]
    fn test_select_by_segment() {
        let places = command(Some("places"), None).select().unwrap();
        assert_eq!(places.len(), registry::by_segment(Segment::Places).len());
        assert!(places.iter().all(|e| e.segment == Segment::Places));
    }

    #[test]
    fn test_select_by_filter() {
        let counts = command(Some("mail"), Some("_count")).select().unwrap();
        assert!(!counts.is_empty());
        assert!(counts.iter().all(|e| e.name.contains("_count")));
    }

    #[test]
    fn test_unknown_segment() {
        assert!(command(Some("drive"), None).select().is_err());
    }

    #[test]
    fn test_row_serializes_flat() {
        let endpoint = registry::find("places.update_place").unwrap();
        let row = EndpointRow {
            qualified_name: endpoint.qualified_name(),
            endpoint,
            path_params: endpoint.path_params(),
        };
        let value = serde_json::to_value(row).unwrap();
        assert_eq!(value["qualified_name"], "places.update_place");
        assert_eq!(value["verb"], "PATCH");
        assert_eq!(value["path_params"], serde_json::json!(["place_id"]));
    }
}
