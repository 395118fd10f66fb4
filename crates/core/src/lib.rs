// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yamagen-core: model types and job naming for yamagen

pub mod macros;

pub mod agent;
pub mod editor;
pub mod naming;
pub mod platform;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use agent::Agent;
pub use editor::{Editor, Track, TrackKind, CUSTOM_REVISION_TRACK};
pub use naming::{JobNamer, ProjectContextNamer};
pub use platform::{Package, Platform};

/// npm registry the `upm-ci-utils` package is installed from.
pub const NPM_UPMCI_INSTALL_URL: &str =
    "https://artifactory.prd.cds.internal.unity3d.com/artifactory/api/npm/upm-npm";
