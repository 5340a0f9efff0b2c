//
//  tc-goggles
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # tc-goggles
//!
//! A client library for the TeamCity REST API, focused on reading build
//! configurations, build templates and their parameters.
//!
//! ## Overview
//!
//! The library connects to a TeamCity server, enumerates build types lazily
//! and searches their parameters with composable filters. It also powers the
//! `tcg` CLI tool.
//!
//! ## Features
//!
//! - **Lazy Sequences**: nothing is fetched until a sequence is advanced
//! - **Composable Filters**: regex predicates combined with `and`, `or` and `!`
//! - **Token or Basic Auth**: bearer tokens and username/password pairs
//! - **Scriptable CLI**: delimiter-separated lines or JSON lines
//!
//! ## Module Structure
//!
//! - [`api`]: REST client, request formatting, resources and lazy sequences
//! - [`auth`]: Authentication credentials
//! - [`filter`]: Parameter filters
//! - [`search`]: Lazy parameter search across build types
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (table, JSON lines)
//! - [`cli`]: Command-line interface definitions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tc_goggles::{Auth, ParameterFilter, ServerConfig, TeamCityEndPoint};
//! use tc_goggles::search::find_parameters;
//!
//! let config = ServerConfig::new("https://ci.example.com", Auth::token("my-token"));
//! let teamcity = TeamCityEndPoint::create(&config)?;
//! let filter = (!ParameterFilter::inherited()).and(ParameterFilter::name_matches("JDK")?);
//!
//! for found in find_parameters(teamcity.build_configurations(), &filter) {
//!     let found = found?;
//!     println!("{}  {:?}", found.build_type.web_url(), found.parameter.value());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Unsupported
//!
//! Paged responses are a hard failure ([`ApiError::PagedResponse`]).

/// Command-line interface definitions.
///
/// Contains the `tcg` commands and arguments defined using the clap derive API.
pub mod cli;

/// TeamCity REST API client.
///
/// Handles authentication, request building, lazy collections and error
/// handling.
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/tcg/config.toml`
/// - macOS: `~/Library/Application Support/tcg/config.toml`
/// - Windows: `%APPDATA%\tcg\config.toml`
pub mod config;

/// Composable parameter filters.
pub mod filter;

/// Output formatting for different modes.
pub mod output;

/// Lazy parameter search.
pub mod search;

/// Re-export of the main CLI struct for convenient access.
///
/// ```rust,no_run
/// use clap::Parser;
/// use tc_goggles::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

pub use api::{ApiError, BuildType, Parameter, ServerConfig, TeamCityEndPoint};
pub use auth::Auth;
pub use config::Config;
pub use filter::ParameterFilter;

/// Application name constant.
///
/// The name of the CLI binary, used for the user agent and configuration paths.
pub const APP_NAME: &str = "tcg";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes allowing scripts to detect the outcome of CLI
/// operations.
///
/// ```rust,no_run
/// use tc_goggles::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Authentication failed.
    ///
    /// The server answered 401 or 403. Check the token or the
    /// username/password pair.
    pub const AUTH_ERROR: i32 = 4;
}
