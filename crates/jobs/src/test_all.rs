// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! "Pack and test all packages" job for the project context.
//!
//! The job waits on every per-platform test job for its editor (plus the
//! min-editor test jobs on trunk), then packs and tests all packages in one
//! pass with `upm-ci`.

use crate::yml_job::{JobDescription, JobYml};
use yamagen_core::{Agent, Editor, JobNamer, Package, Platform, NPM_UPMCI_INSTALL_URL};

/// Builds test-all job descriptions with an injected naming strategy.
#[derive(Debug, Clone)]
pub struct JobAssembler<N> {
    namer: N,
    install_url: String,
}

impl<N: JobNamer> JobAssembler<N> {
    pub fn new(namer: N, install_url: impl Into<String>) -> Self {
        Self { namer, install_url: install_url.into() }
    }

    /// Assembler installing `upm-ci-utils` from the default registry.
    pub fn with_default_registry(namer: N) -> Self {
        Self::new(namer, NPM_UPMCI_INSTALL_URL)
    }

    pub fn namer(&self) -> &N {
        &self.namer
    }

    /// Dependency references for an editor, in platform order.
    ///
    /// Trunk editors also wait on each platform's min-editor test job,
    /// placed directly after that platform's test job.
    pub fn dependencies(&self, platforms: &[Platform], editor: &Editor) -> Vec<String> {
        let mut dependencies = Vec::with_capacity(platforms.len() * 2);
        for platform in platforms {
            dependencies.push(
                self.namer.dependency(&self.namer.job_id_test(&platform.os, &editor.name)),
            );
            if editor.track.is_trunk() {
                dependencies
                    .push(self.namer.dependency(&self.namer.job_id_test_min_editor(&platform.os)));
            }
        }
        dependencies
    }

    /// Build the test-all job for one editor.
    ///
    /// `packages` does not contribute dependencies; every package is covered
    /// by the per-platform test jobs.
    pub fn build(
        &self,
        packages: &[Package],
        agent: &Agent,
        platforms: &[Platform],
        target_branch: &str,
        editor: &Editor,
    ) -> JobDescription {
        tracing::debug!(
            editor = %editor.name,
            track = %editor.track,
            platforms = platforms.len(),
            packages = packages.len(),
            "assembling test-all job"
        );

        let mut job = JobDescription::builder()
            .name(format!("Pack and test all packages - {} [project context]", editor.name))
            .agent(agent.clone())
            .add_dependencies(self.dependencies(platforms, editor))
            .add_var_custom_revision(&editor.track);
        if !editor.track.is_custom_revision() {
            job = job.trigger_expression(trigger_expression(target_branch));
        }
        job.add_commands([
            format!("npm install upm-ci-utils@stable -g --registry {}", self.install_url),
            "upm-ci package izon -t".to_string(),
            "upm-ci package izon -d".to_string(),
        ])
        .build()
    }
}

/// Trigger for non-draft pull requests into `target_branch`.
pub fn trigger_expression(target_branch: &str) -> String {
    format!(r#"pull_request.target eq "{}" AND NOT pull_request.draft"#, target_branch)
}

/// A built test-all job, keyed by its job ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestAllJob {
    pub job_id: String,
    pub yml: JobYml,
}

impl TestAllJob {
    pub fn new<N: JobNamer>(
        assembler: &JobAssembler<N>,
        packages: &[Package],
        agent: &Agent,
        platforms: &[Platform],
        target_branch: &str,
        editor: &Editor,
    ) -> Self {
        let job = assembler.build(packages, agent, platforms, target_branch, editor);
        Self { job_id: assembler.namer().job_id_test_all(&editor.name), yml: job.yml() }
    }
}

#[cfg(test)]
#[path = "test_all_tests.rs"]
mod tests;
