// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor versions and their release tracks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Track value marking an editor built from an arbitrary revision under test.
pub const CUSTOM_REVISION_TRACK: &str = "CUSTOM-REVISION";

/// Release channel an editor is pulled from.
///
/// Holds the text exactly as written in the metafile so it can be echoed
/// back into job variables verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track(String);

impl Track {
    pub fn new(track: impl Into<String>) -> Self {
        Self(track.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the fully lower-cased text is `trunk`.
    pub fn is_trunk(&self) -> bool {
        self.0.to_lowercase() == "trunk"
    }

    /// True only for the exact `CUSTOM-REVISION` sentinel.
    pub fn is_custom_revision(&self) -> bool {
        self.0 == CUSTOM_REVISION_TRACK
    }

    pub fn kind(&self) -> TrackKind {
        if self.is_custom_revision() {
            TrackKind::CustomRevision
        } else if self.is_trunk() {
            TrackKind::Trunk
        } else {
            TrackKind::Release
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Track {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Track {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Classification of a [`Track`] for job construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackKind {
    Trunk,
    Release,
    CustomRevision,
}

crate::simple_display! {
    TrackKind {
        Trunk => "trunk",
        Release => "release",
        CustomRevision => "custom-revision",
    }
}

/// An editor version jobs are run against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub name: String,
    pub track: Track,
}

impl Editor {
    pub fn new(name: impl Into<String>, track: impl Into<Track>) -> Self {
        Self { name: name.into(), track: track.into() }
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
