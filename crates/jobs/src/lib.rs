// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! yamagen-jobs: job assembly and YAML rendering

pub mod config;
pub mod document;
pub mod test_all;
pub mod yml_job;

pub use config::{ConfigError, ProjectConfig, DEFAULT_CONFIG_PATH};
pub use document::{DocumentError, JobDocument};
pub use test_all::{trigger_expression, JobAssembler, TestAllJob};
pub use yml_job::{JobDescription, JobDescriptionBuilder, JobYml, Triggers};
