// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yamagen: generate project-context CI jobs

mod commands;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::generate::GenerateArgs;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "yamagen", version, about = "Generate project-context CI jobs for Yamato")]
struct Cli {
    /// Project root
    #[arg(short = 'C', long = "project", global = true, default_value = ".")]
    project: PathBuf,

    /// Metafile to read (default: <project>/.yamato/config/projectcontext.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the pack-and-test-all job for every editor as YAML
    Generate(GenerateArgs),
    /// List generated jobs with their dependency counts
    Jobs,
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            eprintln!("error: {}", exit);
            std::process::exit(exit.code);
        }
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

/// Log to stderr so generated YAML on stdout stays clean. Defaults to `warn`;
/// override with `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = commands::load_config(&cli.project, cli.config.as_deref())?;
    match command {
        Commands::Generate(args) => commands::generate::handle(args, &config, cli.output),
        Commands::Jobs => commands::jobs::handle(&config, cli.output),
    }
}
