// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project-context metafile.
//!
//! ```toml
//! target_branch = "master"
//!
//! [agent]
//! type = "Unity::VM"
//! image = "package-ci/ubuntu:stable"
//! flavor = "b1.large"
//!
//! [[editors]]
//! name = "trunk"
//! track = "trunk"
//!
//! [[platforms]]
//! os = "win"
//!
//! [[packages]]
//! id = "universal"
//! name = "com.unity.render-pipelines.universal"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use yamagen_core::{Agent, Editor, Package, Platform, NPM_UPMCI_INSTALL_URL};

/// Metafile location relative to the project root.
pub const DEFAULT_CONFIG_PATH: &str = ".yamato/config/projectcontext.toml";

/// Errors from loading a metafile
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid metafile: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything needed to generate the project-context jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Branch pull requests must target to trigger jobs
    pub target_branch: String,
    /// Registry `upm-ci-utils` is installed from
    #[serde(default = "default_install_url")]
    pub install_url: String,
    /// Agent running the test-all jobs
    pub agent: Agent,
    #[serde(default)]
    pub editors: Vec<Editor>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub packages: Vec<Package>,
}

fn default_install_url() -> String {
    NPM_UPMCI_INSTALL_URL.to_string()
}

impl ProjectConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!(path = %path.display(), "loading metafile");
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            editors = config.editors.len(),
            platforms = config.platforms.len(),
            packages = config.packages.len(),
            target_branch = %config.target_branch,
            "metafile loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
