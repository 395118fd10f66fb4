// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `yamagen generate` — render the project-context job file.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use yamagen_core::ProjectContextNamer;
use yamagen_jobs::{JobDocument, ProjectConfig};

use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct GenerateArgs {
    /// Write the YAML to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub write: Option<PathBuf>,
}

#[derive(Serialize)]
struct WriteSummary<'a> {
    path: String,
    jobs: Vec<&'a str>,
}

pub fn handle(args: GenerateArgs, config: &ProjectConfig, format: OutputFormat) -> Result<()> {
    let document = JobDocument::from_config(ProjectContextNamer, config)?;
    let yaml = document.to_yaml_string()?;

    let Some(path) = args.write else {
        print!("{}", yaml);
        return Ok(());
    };

    write_file(&path, &yaml)?;
    tracing::info!(path = %path.display(), jobs = document.len(), "job file written");

    let summary =
        WriteSummary { path: path.display().to_string(), jobs: document.job_ids().collect() };
    format_or_json(format, &summary, || {
        println!("Wrote {} job(s) to {}", summary.jobs.len(), summary.path);
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))
}
