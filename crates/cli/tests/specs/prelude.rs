// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec helpers: a temporary project directory and a fluent command runner.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Metafile with a trunk, a release and a custom-revision editor on two platforms.
pub const METAFILE: &str = r#"
target_branch = "master"

[agent]
type = "Unity::VM"
image = "package-ci/ubuntu:stable"
flavor = "b1.large"

[[editors]]
name = "trunk"
track = "trunk"

[[editors]]
name = "2022.3"
track = "2022.3"

[[editors]]
name = "CUSTOM-REVISION"
track = "CUSTOM-REVISION"

[[platforms]]
os = "win"

[[platforms]]
os = "osx"

[[packages]]
id = "universal"
name = "com.unity.render-pipelines.universal"
"#;

pub const METAFILE_PATH: &str = ".yamato/config/projectcontext.toml";

/// `yamagen` run from the current directory.
pub fn cli() -> Cli {
    Cli::new(None)
}

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Project with [`METAFILE`] at the default location.
    pub fn with_metafile() -> Self {
        let project = Self::empty();
        project.file(METAFILE_PATH, METAFILE);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `yamagen` run inside the project directory.
    pub fn yamagen(&self) -> Cli {
        Cli::new(Some(self.dir.path()))
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    fn new(cwd: Option<&Path>) -> Self {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_yamagen"));
        cmd.env_remove("RUST_LOG");
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> RunResult {
        self.run(true)
    }

    pub fn fails(self) -> RunResult {
        self.run(false)
    }

    fn run(mut self, expect_success: bool) -> RunResult {
        let output = self.cmd.output().unwrap();
        let result = RunResult {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.success(),
            expect_success,
            "unexpected exit {:?}\nstdout:\n{}\nstderr:\n{}",
            result.code,
            result.stdout,
            result.stderr
        );
        result
    }
}

pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {:?}:\n{}", needle, self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {:?}:\n{}", needle, self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {:?}:\n{}", needle, self.stderr);
        self
    }

    pub fn code_is(self, code: i32) -> Self {
        assert_eq!(self.code, Some(code));
        self
    }
}
