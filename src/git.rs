//! Clone-or-pull of a repository into its local path.
//!
//! This uses the system git command, which automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::runner::{CommandRunner, Invocation};

/// What [`sync_repository`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The path was absent and the repository was cloned.
    Cloned,
    /// The path existed and was updated with `git pull`.
    Pulled,
}

/// `git clone <uri>`, run inside the directory that will contain the clone.
pub fn clone_invocation(uri: &str, parent: &Path) -> Invocation {
    Invocation::new("git", parent).args(["clone", uri])
}

/// `git pull`, run inside an existing clone.
pub fn pull_invocation(dir: &Path) -> Invocation {
    Invocation::new("git", dir).arg("pull")
}

/// Clone `uri` into `local_path`, or pull if `local_path` already exists.
///
/// The clone runs in the parent of `local_path` and relies on git naming the
/// checkout after the repository, which is also how `local_path` was derived.
/// Parent directories are created as needed. No locking is done, so two
/// concurrent runs against the same path may race.
pub fn sync_repository(
    runner: &dyn CommandRunner,
    uri: &str,
    local_path: &Path,
) -> Result<SyncAction> {
    if local_path.exists() {
        eprintln!(
            "Running git pull in existing directory: {}",
            local_path.display()
        );
        runner.run(&pull_invocation(local_path))?;
        return Ok(SyncAction::Pulled);
    }

    // Create parent directory if it doesn't exist
    let parent = local_path.parent().unwrap_or(local_path);
    if !parent.exists() {
        debug!("Creating directory {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    eprintln!("Cloning into directory: {}", local_path.display());
    runner.run(&clone_invocation(uri, parent))?;
    Ok(SyncAction::Cloned)
}
