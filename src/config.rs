//! # Configuration
//!
//! Both tools are configured through environment variables, read once by the
//! CLI frontend (through clap's `env` support) and handed to the commands as
//! a [`Config`] value. Nothing below this module reads the environment.
//!
//! | Variable                       | Used by     | Meaning                           |
//! |--------------------------------|-------------|-----------------------------------|
//! | `GCLONE_GIT_DIR`               | both        | root for permanent clones         |
//! | `GCLONE_GIT_TEMP_DIR`          | `clonerepo` | root for `--temp` clones          |
//! | `REPONEW_DEFAULT_ORGANIZATION` | `newrepo`   | organization when none is given   |
//!
//! Values are optional when loaded; a tool fails with
//! [`Error::MissingConfig`] only when it actually needs a value that is unset.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Root directory for permanent clones.
pub const GIT_DIR_ENV: &str = "GCLONE_GIT_DIR";
/// Root directory for temporary clones.
pub const GIT_TEMP_DIR_ENV: &str = "GCLONE_GIT_TEMP_DIR";
/// Organization used by `newrepo` when the identifier has none.
pub const DEFAULT_ORG_ENV: &str = "REPONEW_DEFAULT_ORGANIZATION";

/// Settings shared by `clonerepo` and `newrepo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    git_dir: Option<PathBuf>,
    git_temp_dir: Option<PathBuf>,
    default_organization: Option<String>,
}

fn non_empty<T: AsRef<std::ffi::OsStr>>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.as_ref().is_empty())
}

impl Config {
    /// Build a configuration, treating empty values as unset.
    pub fn new(
        git_dir: Option<PathBuf>,
        git_temp_dir: Option<PathBuf>,
        default_organization: Option<String>,
    ) -> Self {
        Self {
            git_dir: non_empty(git_dir),
            git_temp_dir: non_empty(git_temp_dir),
            default_organization: non_empty(default_organization),
        }
    }

    #[cfg(test)]
    pub fn with_git_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.git_dir = non_empty(Some(dir.into()));
        self
    }

    #[cfg(test)]
    pub fn with_git_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.git_temp_dir = non_empty(Some(dir.into()));
        self
    }

    #[cfg(test)]
    pub fn with_default_organization(mut self, org: impl Into<String>) -> Self {
        self.default_organization = non_empty(Some(org.into()));
        self
    }

    /// Root for permanent clones.
    pub fn git_dir(&self) -> Result<&Path> {
        self.git_dir.as_deref().ok_or_else(|| Error::MissingConfig {
            variable: GIT_DIR_ENV,
            hint: Some("Set it to the directory where you keep your git repositories".to_string()),
        })
    }

    /// Root for temporary clones.
    pub fn git_temp_dir(&self) -> Result<&Path> {
        self.git_temp_dir
            .as_deref()
            .ok_or_else(|| Error::MissingConfig {
                variable: GIT_TEMP_DIR_ENV,
                hint: Some("Set it to the directory used for throwaway clones".to_string()),
            })
    }

    /// The clone root for `clonerepo`, temporary or permanent.
    pub fn clone_root(&self, temp: bool) -> Result<&Path> {
        if temp {
            self.git_temp_dir()
        } else {
            self.git_dir()
        }
    }

    pub fn default_organization(&self) -> Option<&str> {
        self.default_organization.as_deref()
    }
}
