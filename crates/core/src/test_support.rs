// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::naming::JobNamer;
use crate::{Agent, Editor, Platform};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for model types.
pub mod strategies {
    use crate::{Editor, Platform, Track};
    use proptest::prelude::*;

    /// Any track that is neither trunk nor the custom-revision sentinel.
    pub fn arb_other_track() -> impl Strategy<Value = Track> {
        prop_oneof![
            "20[0-9]{2}\\.[1-4]",
            Just("custom-revision".to_string()),
            Just("trunk-staging".to_string()),
            Just(String::new()),
            ".*",
        ]
        .prop_map(Track::new)
        .prop_filter("trunk and custom revision are handled separately", |t| {
            !t.is_trunk() && !t.is_custom_revision()
        })
    }

    /// `trunk` in arbitrary casing.
    pub fn arb_trunk_track() -> impl Strategy<Value = Track> {
        proptest::collection::vec(any::<bool>(), 5).prop_map(|upper| {
            let text: String = "trunk"
                .chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect();
            Track::new(text)
        })
    }

    pub fn arb_editor(track: impl Strategy<Value = Track>) -> impl Strategy<Value = Editor> {
        ("[a-z0-9.]{1,8}", track).prop_map(|(name, track)| Editor { name, track })
    }

    pub fn arb_platforms() -> impl Strategy<Value = Vec<Platform>> {
        proptest::collection::vec("[a-z]{2,6}".prop_map(Platform::new), 1..6)
    }
}

// ── Naming ──────────────────────────────────────────────────────────────────

/// Namer producing short, predictable identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubNamer;

impl JobNamer for StubNamer {
    fn filepath(&self) -> String {
        "ctx".to_string()
    }

    fn job_id_test_all(&self, editor_name: &str) -> String {
        format!("all:{}", editor_name)
    }

    fn job_id_test(&self, os: &str, editor_name: &str) -> String {
        format!("test:{}:{}", os, editor_name)
    }

    fn job_id_test_min_editor(&self, os: &str) -> String {
        format!("min:{}", os)
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────────

pub fn test_agent() -> Agent {
    Agent::new("Unity::VM", "package-ci/ubuntu:stable").with_flavor("b1.large")
}

pub fn platforms(oses: &[&str]) -> Vec<Platform> {
    oses.iter().map(|os| Platform::new(*os)).collect()
}

pub fn editor(name: &str, track: &str) -> Editor {
    Editor::new(name, track)
}
