// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CI agent descriptor.
//!
//! The agent is forwarded into job YAML as-is:
//!
//! ```toml
//! [agent]
//! type = "Unity::VM"
//! image = "package-ci/ubuntu:stable"
//! flavor = "b1.large"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Machine a job runs on.
///
/// Keys other than `type`, `image` and `flavor` are kept in `extra`
/// in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl Agent {
    pub fn new(kind: impl Into<String>, image: impl Into<String>) -> Self {
        Self { kind: kind.into(), image: image.into(), flavor: None, extra: IndexMap::new() }
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
