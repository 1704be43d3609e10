//
//  graph-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};
use crate::output::{OutputFormat, TableBuilder};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print one value
    Get(GetArgs),

    /// Set one value
    Set(SetArgs),

    /// Print every value
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub key: String,

    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({ "key": args.key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let mut config = Config::load()?;
        if !config.set(&args.key, args.value.clone()) {
            bail!("Invalid value for {}: {}", args.key, args.value);
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                args.value
            );
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let writer = global.writer(&config)?;

        if writer.format() == OutputFormat::Table {
            TableBuilder::new()
                .headers(["Key", "Value"])
                .rows(KEYS.iter().map(|key| [key.to_string(), config.get(key).unwrap_or_default()]))
                .print();
            return Ok(());
        }
        writer.write(&config)
    }
}

fn check_key(key: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            KEYS.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("default_user").is_ok());
        assert!(check_key("editor").is_err());
    }
}
