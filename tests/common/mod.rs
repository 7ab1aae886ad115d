//! Shared test utilities for the E2E tests.
//!
//! This module provides a fixture with a scratch clone root and fake `git` /
//! `gh` executables placed first on `PATH`, so the binaries can be driven
//! without network access or real repositories.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fake_tool("git", 0);
//!     fixture
//!         .clonerepo()
//!         .arg("https://github.com/acme/widgets.git")
//!         .assert()
//!         .success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Environment variables the binaries read; cleared for every command.
const CONFIG_VARS: &[&str] = &[
    "GCLONE_GIT_DIR",
    "GCLONE_GIT_TEMP_DIR",
    "REPONEW_DEFAULT_ORGANIZATION",
    "RUST_LOG",
];

/// A temporary clone root plus a directory of fake tools.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with empty `repos/` and `bin/` directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("repos")
            .create_dir_all()
            .expect("Failed to create repos dir");
        temp_dir
            .child("bin")
            .create_dir_all()
            .expect("Failed to create bin dir");
        Self { temp_dir }
    }

    /// Install a fake executable named `name` that records its working
    /// directory and arguments, writes noise to stdout and stderr, and exits
    /// with `exit_code`.
    #[cfg(unix)]
    pub fn with_fake_tool(self, name: &str, exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             echo \"$(pwd -P)|$*\" >> '{log}'\n\
             echo '{name} stdout noise'\n\
             echo '{name} stderr noise' >&2\n\
             exit {exit_code}\n",
            log = self.log_path(name).display(),
        );
        let tool = self.temp_dir.child("bin").child(name);
        tool.write_str(&script).expect("Failed to write fake tool");
        std::fs::set_permissions(tool.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
        self
    }

    /// Create a directory below the clone root.
    pub fn with_repo_dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.repo_root().join(relative))
            .expect("Failed to create repo dir");
        self
    }

    /// The clone root, used as `GCLONE_GIT_DIR`.
    pub fn repo_root(&self) -> PathBuf {
        self.temp_dir.path().join("repos")
    }

    /// A second root, used as `GCLONE_GIT_TEMP_DIR` when a test sets it.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.path().join("temp-repos")
    }

    /// Lines recorded by the fake tool `name`, each formatted as `cwd|args`
    /// with the physical working directory.
    pub fn calls(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.log_path(name))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(format!("{}.log", name))
    }

    /// Clear the configuration variables and put the fake tools first on
    /// `PATH`.
    fn prepare(&self, mut cmd: Command) -> Command {
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        let mut paths = vec![self.temp_dir.path().join("bin")];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        cmd.env(
            "PATH",
            std::env::join_paths(paths).expect("PATH should be joinable"),
        );
        cmd.current_dir(self.temp_dir.path());
        cmd.env("GCLONE_GIT_DIR", self.repo_root());
        cmd
    }

    /// `clonerepo` with `GCLONE_GIT_DIR` pointing at [`Self::repo_root`].
    pub fn clonerepo(&self) -> Command {
        self.prepare(cargo_bin_cmd!("clonerepo"))
    }

    /// `newrepo` with `GCLONE_GIT_DIR` pointing at [`Self::repo_root`].
    pub fn newrepo(&self) -> Command {
        self.prepare(cargo_bin_cmd!("newrepo"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches stdout consisting of exactly `path` on one line.
pub fn path_line(path: &Path) -> impl predicates::Predicate<str> {
    predicates::str::diff(format!("{}\n", path.display()))
}

/// `path` with symlinks resolved, as recorded by the fake tools.
pub fn physical(path: &Path) -> String {
    path.canonicalize()
        .expect("path should exist")
        .display()
        .to_string()
}
