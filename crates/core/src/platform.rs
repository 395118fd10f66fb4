// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target platforms and the packages tested on them.

use serde::{Deserialize, Serialize};

/// A platform the per-platform test jobs run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Short OS identifier used in job IDs (e.g. "win", "osx", "linux")
    pub os: String,
}

impl Platform {
    pub fn new(os: impl Into<String>) -> Self {
        Self { os: os.into() }
    }
}

/// A package covered by the project context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    /// Full package name (e.g. "com.unity.render-pipelines.universal")
    pub name: String,
}

impl Package {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}
