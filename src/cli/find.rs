//
//  tc-goggles
//  cli/find.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Parameter search command
//!
//! Prints one line per matching parameter:
//!
//! ```text
//! {webUrl}{delimiter}{name}{delimiter}{value}
//! ```
//!
//! Results are printed as the search produces them, so `--limit` also bounds
//! the number of requests sent to the server. Closing stdout early (for
//! instance through `head`) ends the search without an error.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::api::ApiError;
use crate::filter::{ParameterFilter, PatternOptions};
use crate::output::{finish_output, write_json_line, OutputFormat};
use crate::search::{find_parameters, ParameterMatch};

use super::{GlobalOptions, Scope};

/// Find parameters by name (and optionally value)
#[derive(Args, Debug)]
pub struct FindCommand {
    /// Regular expression matched against parameter names
    pub name: String,

    /// Regular expressions matched against parameter values (any of them)
    #[arg(long, short = 'v', num_args = 1..)]
    pub values: Vec<String>,

    /// Stop after this many matches
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Separator between the fields of an output line
    #[arg(long, short = 'd', default_value = "  ")]
    pub delimiter: String,

    /// Also report parameters inherited from templates
    #[arg(long)]
    pub include_inherited: bool,

    /// Match names and values case-insensitively
    #[arg(long, short = 'i')]
    pub ignore_case: bool,

    /// Build types to search
    #[arg(long, value_enum, default_value_t = Scope::All)]
    pub scope: Scope,
}

/// JSON representation of a match.
#[derive(Debug, Serialize)]
struct MatchRecord<'m> {
    build_type_id: &'m str,
    build_type_name: &'m str,
    project_id: &'m str,
    web_url: &'m str,
    name: Option<&'m str>,
    value: Option<&'m str>,
    inherited: Option<bool>,
}

impl<'m> From<&'m ParameterMatch<'_>> for MatchRecord<'m> {
    fn from(found: &'m ParameterMatch<'_>) -> Self {
        Self {
            build_type_id: found.build_type.id(),
            build_type_name: found.build_type.name(),
            project_id: found.build_type.project_id(),
            web_url: found.build_type.web_url(),
            name: found.parameter.name(),
            value: found.parameter.value(),
            inherited: found.parameter.inherited(),
        }
    }
}

impl FindCommand {
    /// Searches the build types in scope and prints each match.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let filter = self.build_filter()?;
        let teamcity = global.endpoint()?;
        debug!(%filter, scope = ?self.scope, limit = ?self.limit, "searching parameters");

        let format = OutputFormat::from_json_flag(global.json);
        let search = find_parameters(self.scope.build_types(&teamcity), &filter);
        finish_output(self.write_matches(&mut std::io::stdout().lock(), search, format))
    }

    /// Writes up to `limit` matches, stopping at the first error.
    fn write_matches<'a, W, I>(&self, out: &mut W, matches: I, format: OutputFormat) -> Result<()>
    where
        W: Write,
        I: Iterator<Item = Result<ParameterMatch<'a>, ApiError>>,
    {
        for found in matches.take(self.limit.unwrap_or(usize::MAX)) {
            let found = found?;
            match format {
                OutputFormat::Json => write_json_line(out, &MatchRecord::from(&found))?,
                OutputFormat::Text => writeln!(out, "{}", format_match(&found, &self.delimiter))?,
            }
        }

        Ok(())
    }

    /// Builds `!inherited && name =~ NAME`, plus `value =~ (V1|V2|...)` when
    /// values are given.
    pub fn build_filter(&self) -> Result<ParameterFilter> {
        let options = PatternOptions {
            case_insensitive: self.ignore_case,
            ..PatternOptions::default()
        };

        let mut filter = ParameterFilter::name_matches_with(&self.name, options)
            .with_context(|| format!("Invalid name pattern '{}'", self.name))?;

        if !self.include_inherited {
            filter = (!ParameterFilter::inherited()).and(filter);
        }

        if !self.values.is_empty() {
            let pattern = format!("({})", self.values.join("|"));
            let values = ParameterFilter::value_matches_with(&pattern, options)
                .with_context(|| format!("Invalid value pattern '{pattern}'"))?;
            filter = filter.and(values);
        }

        Ok(filter)
    }
}

/// Formats a match as `{webUrl}{delimiter}{name}{delimiter}{value}`.
///
/// Absent fields render as empty strings.
pub fn format_match(found: &ParameterMatch<'_>, delimiter: &str) -> String {
    format!(
        "{url}{d}{name}{d}{value}",
        url = found.build_type.web_url(),
        name = found.parameter.name().unwrap_or_default(),
        value = found.parameter.value().unwrap_or_default(),
        d = delimiter,
    )
}
