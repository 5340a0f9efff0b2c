//
//  tc-goggles
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tc_goggles::api::ApiError;
use tc_goggles::cli::{Cli, Commands};
use tc_goggles::exit_codes;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli);

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TCG_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) if api_error.is_auth_failure() => exit_codes::AUTH_ERROR,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Find(cmd) => cmd.run(&cli.global),
        Commands::List(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Completion(cmd) => cmd.run(&cli.global),
        Commands::Version => {
            println!("{} version {}", tc_goggles::APP_NAME, tc_goggles::VERSION);
            Ok(())
        }
    }
}
