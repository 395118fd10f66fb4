// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `yamagen jobs` — list the jobs a metafile generates.

use anyhow::Result;
use serde::Serialize;
use yamagen_core::{ProjectContextNamer, TrackKind};
use yamagen_jobs::{JobDocument, ProjectConfig};

use crate::output::{format_or_json, render_table, OutputFormat};

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub job_id: String,
    pub editor: String,
    pub track: TrackKind,
    pub dependencies: usize,
    pub triggered: bool,
}

/// Summaries in metafile order.
pub fn summarize(config: &ProjectConfig) -> Result<Vec<JobSummary>> {
    let document = JobDocument::from_config(ProjectContextNamer, config)?;
    // One job per editor, inserted in editor order
    Ok(config
        .editors
        .iter()
        .zip(document.jobs())
        .map(|(editor, (job_id, yml))| JobSummary {
            job_id: job_id.to_string(),
            editor: editor.name.clone(),
            track: editor.track.kind(),
            dependencies: yml.dependencies.len(),
            triggered: yml.triggers.is_some(),
        })
        .collect())
}

pub fn handle(config: &ProjectConfig, format: OutputFormat) -> Result<()> {
    let summaries = summarize(config)?;
    format_or_json(format, &summaries, || {
        if summaries.is_empty() {
            println!("No editors defined");
            return;
        }
        let rows: Vec<Vec<String>> = summaries
            .iter()
            .map(|s| {
                vec![
                    s.job_id.clone(),
                    s.track.to_string(),
                    s.dependencies.to_string(),
                    if s.triggered { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        print!("{}", render_table(&["JOB", "TRACK", "DEPS", "TRIGGER"], &rows));
    })
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
