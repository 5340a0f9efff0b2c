//
//  tc-goggles
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod find;
mod list;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use find::FindCommand;
pub use list::ListCommand;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::api::{ApiError, BuildType, ServerConfig, TeamCityEndPoint};
use crate::auth::Auth;
use crate::config::{validate_server, Config};

/// tc-goggles - Look through TeamCity build configuration parameters
#[derive(Parser, Debug)]
#[command(
    name = "tcg",
    version,
    about = "Look through TeamCity build configuration parameters",
    long_about = "tcg searches the parameters of TeamCity build configurations and templates.\n\n\
                  Server and credentials come from flags, TEAMCITY_* environment variables \
                  or the config file.",
    propagate_version = true,
    after_help = "Use 'tcg <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// TeamCity server URL
    #[arg(long, short = 's', global = true, env = "TEAMCITY_SERVER")]
    pub server: Option<String>,

    /// Access token (bearer authentication)
    #[arg(long, global = true, env = "TEAMCITY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Username for basic authentication
    #[arg(long, short = 'u', global = true, env = "TEAMCITY_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true, env = "TEAMCITY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output as JSON lines
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Resolves the server connection from flags and environment, falling
    /// back to `config` for the server and username.
    ///
    /// A token takes precedence over a username/password pair.
    pub fn server_config(&self, config: &Config) -> Result<ServerConfig> {
        let server = non_empty(&self.server)
            .or_else(|| non_empty(&config.server))
            .ok_or_else(|| {
                anyhow!(
                    "No TeamCity server configured. Use --server, set TEAMCITY_SERVER \
                     or run 'tcg config set server <URL>'"
                )
            })?;
        validate_server(server)?;

        let auth = match non_empty(&self.token) {
            Some(token) => Auth::token(token),
            None => {
                let username = non_empty(&self.username).or_else(|| non_empty(&config.username));
                match (username, non_empty(&self.password)) {
                    (Some(username), Some(password)) => Auth::basic(username, password),
                    (Some(_), None) => bail!(
                        "No password for basic authentication. \
                         Use --password or set TEAMCITY_PASSWORD"
                    ),
                    _ => bail!(
                        "No credentials. Use --token or set TEAMCITY_ACCESS_TOKEN, \
                         or provide --username and --password"
                    ),
                }
            }
        };

        Ok(ServerConfig::new(server, auth))
    }

    /// Loads the config file and connects to the resolved server.
    pub(crate) fn endpoint(&self) -> Result<TeamCityEndPoint> {
        let config = Config::load()?;
        Ok(TeamCityEndPoint::create(&self.server_config(&config)?)?)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Which build types a command walks.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Build configurations, then templates
    #[default]
    All,
    /// Build configurations only
    Configurations,
    /// Build templates only
    Templates,
}

type BuildTypeIter<'e> = Box<dyn Iterator<Item = Result<BuildType<'e>, ApiError>> + 'e>;

impl Scope {
    /// The lazy build type sequence for this scope.
    pub fn build_types<'e>(&self, teamcity: &'e TeamCityEndPoint) -> BuildTypeIter<'e> {
        match self {
            Self::All => Box::new(teamcity.build_types()),
            Self::Configurations => Box::new(teamcity.build_configurations()),
            Self::Templates => Box::new(teamcity.build_templates()),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find parameters by name (and optionally value)
    #[command(visible_alias = "f")]
    Find(FindCommand),

    /// List build configurations and templates
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
