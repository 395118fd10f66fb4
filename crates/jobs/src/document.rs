// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering all test-all jobs of a project into one YAML file.

use crate::config::ProjectConfig;
use crate::test_all::{JobAssembler, TestAllJob};
use crate::yml_job::JobYml;
use indexmap::map::Entry;
use indexmap::IndexMap;
use thiserror::Error;
use yamagen_core::JobNamer;

/// Errors from assembling or rendering a job document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("job '{0}' generated more than once; editor names must be unique")]
    DuplicateJob(String),
    #[error("failed to render YAML: {0}")]
    Render(#[from] serde_yaml::Error),
}

/// Ordered set of jobs keyed by job ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDocument {
    jobs: IndexMap<String, JobYml>,
}

impl JobDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// One test-all job per editor, in metafile order.
    pub fn from_config<N: JobNamer>(
        namer: N,
        config: &ProjectConfig,
    ) -> Result<Self, DocumentError> {
        let assembler = JobAssembler::new(namer, config.install_url.clone());
        let mut document = Self::new();
        for editor in &config.editors {
            document.insert(TestAllJob::new(
                &assembler,
                &config.packages,
                &config.agent,
                &config.platforms,
                &config.target_branch,
                editor,
            ))?;
        }
        tracing::info!(jobs = document.len(), "job document assembled");
        Ok(document)
    }

    pub fn insert(&mut self, job: TestAllJob) -> Result<(), DocumentError> {
        match self.jobs.entry(job.job_id) {
            Entry::Occupied(entry) => Err(DocumentError::DuplicateJob(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(job.yml);
                Ok(())
            }
        }
    }

    pub fn get(&self, job_id: &str) -> Option<&JobYml> {
        self.jobs.get(job_id)
    }

    pub fn job_ids(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    pub fn jobs(&self) -> impl Iterator<Item = (&str, &JobYml)> {
        self.jobs.iter().map(|(id, yml)| (id.as_str(), yml))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn to_yaml_string(&self) -> Result<String, DocumentError> {
        Ok(serde_yaml::to_string(&self.jobs)?)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
