//! # `newrepo` Implementation
//!
//! Creates a GitHub repository with `gh repo create --clone` and the local
//! directory `GCLONE_GIT_DIR/<organization>/<name>` it is cloned into. The
//! organization may be omitted from the identifier when
//! `REPONEW_DEFAULT_ORGANIZATION` is set.
//!
//! Boolean options come in `--flag`/`--no-flag` pairs; the last one given wins.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{Config, DEFAULT_ORG_ENV, GIT_DIR_ENV};
use crate::github::{self, CreateRepo, Visibility};
use crate::identifier::parse_repo_id;
use crate::path::resolve_local_path;
use crate::runner::CommandRunner;

/// Creates a new GitHub repository
#[derive(Parser, Debug)]
#[command(name = "newrepo")]
#[command(version, about, long_about = None)]
#[command(after_help = "Tip: use cd \"$(newrepo <REPO_ID>)\" to change to the new directory.")]
pub struct NewArgs {
    /// Organization (optional) and repository name. Example: myorg/myrepo
    #[arg(value_name = "REPO_ID")]
    pub repo_id: String,

    /// Don't make any changes
    #[arg(short = 'n', long, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    #[arg(long, overrides_with = "dry_run", hide = true)]
    pub no_dry_run: bool,

    /// Make the new repository private
    #[arg(short, long, overrides_with = "no_private")]
    pub private: bool,

    /// Make the new repository public (the default)
    #[arg(long, overrides_with = "private")]
    pub no_private: bool,

    /// Repository to use as template. For instance 'myorg/mytemplaterepo'
    #[arg(short, long, value_name = "REPO")]
    pub template: Option<String>,

    /// The description for the repository
    #[arg(short, long)]
    pub description: Option<String>,

    /// Root directory for permanent clones
    #[arg(long, value_name = "DIR", env = GIT_DIR_ENV)]
    pub git_dir: Option<PathBuf>,

    /// Organization used when REPO_ID has none
    #[arg(long, value_name = "ORG", env = DEFAULT_ORG_ENV)]
    pub default_org: Option<String>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl NewArgs {
    pub fn config(&self) -> Config {
        Config::new(self.git_dir.clone(), None, self.default_org.clone())
    }
}

/// Execute `newrepo`, returning the local path of the new repository.
pub fn execute(args: NewArgs, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let config = args.config();

    let id = parse_repo_id(&args.repo_id, config.default_organization(), DEFAULT_ORG_ENV)?;
    let local_path = resolve_local_path(config.git_dir()?, &id);

    let request = CreateRepo::new(id, Visibility::from_private(args.private))
        .with_template(args.template)
        .with_description(args.description);
    github::create_repository(runner, &request, &local_path, args.dry_run)?;

    Ok(local_path)
}
