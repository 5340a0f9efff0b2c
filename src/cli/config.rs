//
//  tc-goggles
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Get, set, unset and list the defaults stored in the config file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(GetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (server, username)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (server, username)
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        check_key(&args.key)?;
        let value = Config::load()?.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, args.value.clone())?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string(&result)?);
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

    fn unset(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if !config.unset(&args.key) {
            check_key(&args.key)?;
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            println!("{}", serde_json::to_string(&config)?);
            return Ok(());
        }

        let entries = config.entries();
        if entries.is_empty() {
            println!("No configuration values set.");
        }
        for (key, value) in entries {
            println!("{} = {}", style(key).cyan(), value);
        }

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", "));
    }
    Ok(())
}
