//! # Remote Repository Creation
//!
//! Creates a repository on GitHub with the `gh` CLI and prepares the matching
//! local directory. Authentication and the hosting API are left entirely to
//! `gh`; this module only decides what to run and where.
//!
//! Unlike cloning, an existing local directory is a hard error here: the
//! directory is the user's signal that the repository is already set up, and
//! nothing is overwritten.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::identifier::RepoId;
use crate::runner::{CommandRunner, Invocation, OutputMode};

/// Visibility of a newly created repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// The `gh repo create` flag for this visibility.
    pub fn flag(self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Everything `gh repo create` needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRepo {
    pub id: RepoId,
    pub visibility: Visibility,
    /// Template repository, e.g. `myorg/mytemplaterepo`
    pub template: Option<String>,
    pub description: Option<String>,
}

impl CreateRepo {
    pub fn new(id: RepoId, visibility: Visibility) -> Self {
        Self {
            id,
            visibility,
            template: None,
            description: None,
        }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// `gh repo create --clone org/repo --public|--private [--template T] [--description D]`
///
/// Empty template or description values are left out.
pub fn create_invocation(request: &CreateRepo, parent: &Path) -> Invocation {
    let mut invocation = Invocation::new("gh", parent)
        .args(["repo", "create", "--clone"])
        .arg(request.id.full_name())
        .arg(request.visibility.flag())
        .output(OutputMode::Capture);

    if let Some(template) = request.template.as_deref().filter(|t| !t.is_empty()) {
        invocation = invocation.args(["--template", template]);
    }
    if let Some(description) = request.description.as_deref().filter(|d| !d.is_empty()) {
        invocation = invocation.args(["--description", description]);
    }

    invocation
}

/// Create the remote repository and its local directory at `local_path`.
///
/// With `dry_run` nothing is created and nothing is run; the intended
/// actions are reported on stderr instead.
pub fn create_repository(
    runner: &dyn CommandRunner,
    request: &CreateRepo,
    local_path: &Path,
    dry_run: bool,
) -> Result<()> {
    let parent = local_path.parent().unwrap_or(local_path);
    let invocation = create_invocation(request, parent);

    if dry_run {
        eprintln!("DRY-RUN: Would create dir {}", local_path.display());
        eprintln!("DRY-RUN: Would run: {}", invocation);
        return Ok(());
    }

    if local_path.exists() {
        return Err(Error::DirectoryExists {
            path: local_path.to_path_buf(),
        });
    }

    debug!("Creating directory {}", local_path.display());
    fs::create_dir_all(local_path)?;

    eprintln!("Command: {}", invocation);
    runner.run(&invocation)?;

    eprintln!(
        "Successfully created {} repository in directory {}",
        request.visibility,
        local_path.display()
    );
    Ok(())
}
