//! Local path resolution for repositories

use std::path::{Path, PathBuf};

use crate::identifier::RepoId;

/// Where a repository lives under `root`: `root/<organization>/<name>`.
///
/// Pure: never touches the filesystem, so the same inputs always produce the
/// same path.
pub fn resolve_local_path(root: &Path, id: &RepoId) -> PathBuf {
    root.join(id.organization()).join(id.name())
}
