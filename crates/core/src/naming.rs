// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job ID and file naming for the project-context job file.

/// Naming strategy for project-context jobs.
///
/// Implementations must be pure: the same inputs always yield the same
/// identifiers, since generated files reference each other by these names.
pub trait JobNamer {
    /// Path of the YAML file holding project-context jobs.
    fn filepath(&self) -> String;

    /// ID of the job that packs and tests all packages for an editor.
    fn job_id_test_all(&self, editor_name: &str) -> String;

    /// ID of the per-platform test job for an editor.
    fn job_id_test(&self, os: &str, editor_name: &str) -> String;

    /// ID of the per-platform test job against the minimum supported editor.
    fn job_id_test_min_editor(&self, os: &str) -> String;

    /// Dependency reference (`<file>#<job_id>`) for a job in the project-context file.
    fn dependency(&self, job_id: &str) -> String {
        format!("{}#{}", self.filepath(), job_id)
    }
}

/// Naming used by the checked-in `.yamato` job files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectContextNamer;

impl JobNamer for ProjectContextNamer {
    fn filepath(&self) -> String {
        ".yamato/_projectcontext.yml".to_string()
    }

    fn job_id_test_all(&self, editor_name: &str) -> String {
        format!("all_package_ci_project_{}", editor_name)
    }

    fn job_id_test(&self, os: &str, editor_name: &str) -> String {
        format!("test_{}_{}", os, editor_name)
    }

    fn job_id_test_min_editor(&self, os: &str) -> String {
        format!("test_min_editor_{}", os)
    }
}

impl<N: JobNamer + ?Sized> JobNamer for &N {
    fn filepath(&self) -> String {
        (**self).filepath()
    }

    fn job_id_test_all(&self, editor_name: &str) -> String {
        (**self).job_id_test_all(editor_name)
    }

    fn job_id_test(&self, os: &str, editor_name: &str) -> String {
        (**self).job_id_test(os, editor_name)
    }

    fn job_id_test_min_editor(&self, os: &str) -> String {
        (**self).job_id_test_min_editor(os)
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
