// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PLaMo Translate - Japanese/English selection translator.
//!
//! Binary entry point: parses the command line, loads process configuration,
//! initializes tracing, and dispatches to the command handlers.

mod cli;
mod config;
mod surface;

use clap::Parser;

#[tokio::main]
async fn main() {
    let parsed = cli::Cli::parse();

    let process = match &parsed.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let process = match process {
        Ok(process) => process,
        Err(e) => {
            eprintln!("plamo-translate: invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    config::init_tracing(&process.log_level);

    if let Err(e) = cli::run(parsed.command, &process).await {
        eprintln!("plamo-translate: {e}");
        std::process::exit(1);
    }
}
