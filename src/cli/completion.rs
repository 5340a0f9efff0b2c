//
//  tc-goggles
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell completion command

use std::io::Write;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::{Cli, GlobalOptions};

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    pub fn run(&self, _global: &GlobalOptions) -> Result<()> {
        self.write_to(&mut std::io::stdout())
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, crate::APP_NAME, writer);
        Ok(())
    }
}
