//! # `clonerepo` Implementation
//!
//! Clones a repository into `<root>/<organization>/<name>`, or pulls it if
//! that directory already exists. `<root>` is `GCLONE_GIT_DIR`, or
//! `GCLONE_GIT_TEMP_DIR` with `--temp`.
//!
//! ## Example
//!
//! ```bash
//! cd "$(clonerepo git@github.com:acme/widgets.git)"
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::config::{Config, GIT_DIR_ENV, GIT_TEMP_DIR_ENV};
use crate::error::Error;
use crate::git;
use crate::identifier::parse_remote_uri;
use crate::path::resolve_local_path;
use crate::runner::CommandRunner;

/// git clones a repo URI to the appropriate directory
#[derive(Parser, Debug)]
#[command(name = "clonerepo")]
#[command(version, about, long_about = None)]
#[command(after_help = "Tip: use cd \"$(clonerepo <REPO_URI>)\" to change to the cloned directory.")]
pub struct CloneArgs {
    /// URI of the repo to clone
    #[arg(value_name = "REPO_URI")]
    pub repo_uri: String,

    /// Clone the repository in the temporary directory
    #[arg(short, long)]
    pub temp: bool,

    /// Root directory for permanent clones
    #[arg(long, value_name = "DIR", env = GIT_DIR_ENV)]
    pub git_dir: Option<PathBuf>,

    /// Root directory for temporary clones
    #[arg(long, value_name = "DIR", env = GIT_TEMP_DIR_ENV)]
    pub temp_dir: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl CloneArgs {
    pub fn config(&self) -> Config {
        Config::new(self.git_dir.clone(), self.temp_dir.clone(), None)
    }
}

/// Execute `clonerepo`, returning the local path of the repository.
pub fn execute(args: CloneArgs, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let config = args.config();
    let root = config.clone_root(args.temp)?;

    // git must receive exactly the string that was parsed.
    let uri = args.repo_uri.trim();
    let id = parse_remote_uri(uri).map_err(|reason| Error::InvalidUri {
        uri: uri.to_string(),
        reason,
    })?;

    let local_path = resolve_local_path(root, &id);
    let action = git::sync_repository(runner, uri, &local_path)?;
    info!("{} {:?} into {}", id, action, local_path.display());

    Ok(local_path)
}
