//! # repodir
//!
//! Keeps git repositories in a predictable tree, `<root>/<organization>/<name>`,
//! and ships two command-line tools built on it:
//!
//! - **`clonerepo <uri> [--temp]`** clones a repository into its place in the
//!   tree, or runs `git pull` if it is already there.
//! - **`newrepo [org/]repo`** creates a repository on GitHub with `gh` and the
//!   matching local directory.
//!
//! Both print nothing but the resolved path on stdout, so they compose with
//! shell command substitution. Everything else goes to stderr.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::{Path, PathBuf};
//! use repodir::identifier::parse_remote_uri;
//! use repodir::path::resolve_local_path;
//!
//! let id = parse_remote_uri("https://github.com/acme/widgets.git").unwrap();
//! let path = resolve_local_path(Path::new("/data/repos"), &id);
//! assert_eq!(path, PathBuf::from("/data/repos/acme/widgets"));
//! ```
//!
//! ## Modules
//!
//! - **`identifier`**: parses remote URIs and `org/repo` shorthands.
//! - **`path`**: maps an identifier onto the local tree.
//! - **`config`**: the environment-derived settings, passed around explicitly.
//! - **`runner`**: the seam through which `git` and `gh` are executed.
//! - **`git`** / **`github`**: the clone-or-pull and create workflows.
//! - **`commands`**: the clap frontends used by the two binaries.
//!
//! The tools are single-threaded and one-shot. Failures are never retried;
//! an external command's exit status becomes the process exit status.

pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod identifier;
pub mod path;
pub mod runner;

#[cfg(test)]
mod path_proptest;
