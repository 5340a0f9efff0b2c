//
//  tc-goggles
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Rendering helpers for the CLI:
//!
//! - **Plain**: delimiter-separated lines, one per record, for shell pipelines
//! - **Table**: human-readable tables via `comfy_table`
//! - **JSON**: JSON Lines, one object per record, via `serde_json`
//!
//! The plain and table formats are chosen per command; `--json` switches any
//! command to JSON Lines.

use std::io;

use tracing::debug;

mod json;
mod table;

pub use json::*;
pub use table::*;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The command's native human-readable format.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Selects the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Treats a closed stdout (`tcg find X | head -1`) as a normal end of output.
///
/// Any other error is returned unchanged.
pub fn finish_output(result: anyhow::Result<()>) -> anyhow::Result<()> {
    match result {
        Err(err) if is_broken_pipe(&err) => {
            debug!("stdout closed, stopping output");
            Ok(())
        }
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}
