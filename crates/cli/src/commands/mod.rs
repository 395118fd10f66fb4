// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod generate;
pub mod jobs;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use yamagen_jobs::{ProjectConfig, DEFAULT_CONFIG_PATH};

use crate::exit_error::ExitError;

/// Metafile path: `--config` if given, otherwise the default under the project root.
pub fn config_path(project: &Path, config: Option<&Path>) -> PathBuf {
    match config {
        Some(path) => path.to_path_buf(),
        None => project.join(DEFAULT_CONFIG_PATH),
    }
}

pub fn load_config(project: &Path, config: Option<&Path>) -> Result<ProjectConfig> {
    let path = config_path(project, config);
    if !path.is_file() {
        return Err(ExitError::not_found(format!("metafile not found: {}", path.display())).into());
    }
    ProjectConfig::load(&path).with_context(|| format!("cannot use metafile {}", path.display()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
