//
//  tc-goggles
//  cli/list.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build type listing command

use anyhow::Result;
use clap::Args;
use console::style;

use crate::api::BuildType;
use crate::output::{finish_output, write_json_line, OutputFormat, TableBuilder};

use super::{GlobalOptions, Scope};

/// List build configurations and templates
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Build types to list
    #[arg(long, value_enum, default_value_t = Scope::All)]
    pub scope: Scope,
}

impl ListCommand {
    /// Lists the build types in scope.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let teamcity = global.endpoint()?;
        let mut build_types = self.scope.build_types(&teamcity);

        match OutputFormat::from_json_flag(global.json) {
            OutputFormat::Json => {
                let mut out = std::io::stdout().lock();
                let written = build_types.try_for_each(|build_type| {
                    write_json_line(&mut out, build_type?.info())
                });
                finish_output(written)?;
            }
            OutputFormat::Text => {
                let build_types = build_types.collect::<Result<Vec<_>, _>>()?;
                if build_types.is_empty() {
                    println!("No build types found.");
                    return Ok(());
                }

                let count = build_types.len();
                build_table(&build_types).print();
                println!("{}", style(format!("{count} build type(s)")).dim());
            }
        }

        Ok(())
    }
}

fn build_table(build_types: &[BuildType<'_>]) -> TableBuilder {
    build_types.iter().fold(
        TableBuilder::new().headers(["ID", "Name", "Project", "Template", "URL"]),
        |table, build_type| {
            let template = if build_type.info().template_flag == Some(true) {
                "yes"
            } else {
                ""
            };
            table.row([
                build_type.id(),
                build_type.name(),
                build_type.project_id(),
                template,
                build_type.web_url(),
            ])
        },
    )
}
