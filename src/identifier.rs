//! # Repository Identifiers
//!
//! A [`RepoId`] is the `(organization, name)` pair that decides where a
//! repository lives on disk. It can be obtained two ways:
//!
//! - [`parse_remote_uri`] reads it out of a git remote URI, for `clonerepo`.
//! - [`parse_repo_id`] reads the `org/repo` (or bare `repo`) shorthand given
//!   to `newrepo`, falling back to a default organization.
//!
//! ## Supported URI grammars
//!
//! ```text
//! url   = scheme "://" authority "/" path
//! scp   = [user "@"] host ":" path          ; ':' before any '/'
//! local = path
//! path  = *(segment "/") organization "/" name ".git"
//! ```
//!
//! The organization is the segment immediately before the repository name and
//! may contain `[A-Za-z0-9.-]`. The name may additionally contain `_`.

use std::fmt;

use crate::error::{Error, Result};

/// Suffix every remote URI must end with.
const GIT_SUFFIX: &str = ".git";

/// Organization and repository name of a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    organization: String,
    name: String,
}

impl RepoId {
    /// Build an identifier from already validated parts.
    ///
    /// Both parts must be non-empty; use the parse functions for user input.
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        let id = Self {
            organization: organization.into(),
            name: name.into(),
        };
        debug_assert!(!id.organization.is_empty() && !id.name.is_empty());
        id
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `org/name`, the form `gh` expects.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.organization, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}

/// Why a remote URI could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The input was empty or only whitespace.
    Empty,
    /// The URI does not end in `.git`.
    MissingGitSuffix,
    /// The repository name in front of `.git` is empty or has invalid characters.
    InvalidName(String),
    /// There is no path segment in front of the repository name.
    MissingOrganization,
    /// The organization segment has invalid characters.
    InvalidOrganization(String),
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::Empty => write!(f, "the URI is empty"),
            UriError::MissingGitSuffix => write!(f, "the URI must end with '{}'", GIT_SUFFIX),
            UriError::InvalidName(name) if name.is_empty() => {
                write!(f, "the repository name is empty")
            }
            UriError::InvalidName(name) => write!(f, "invalid repository name '{}'", name),
            UriError::MissingOrganization => write!(f, "could not find the organization"),
            UriError::InvalidOrganization(org) => write!(f, "invalid organization '{}'", org),
        }
    }
}

impl std::error::Error for UriError {}

fn is_organization_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

fn is_name_char(c: char) -> bool {
    is_organization_char(c) || c == '_'
}

/// `.` and `..` would resolve outside `root/<organization>/<name>`.
fn is_relative_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Strip the scheme/host part of a URI, leaving the repository path.
fn repository_path(uri: &str) -> &str {
    if let Some(scheme_end) = uri.find("://") {
        let rest = &uri[scheme_end + 3..];
        // Everything up to the first '/' is the authority.
        return rest.find('/').map(|i| &rest[i + 1..]).unwrap_or("");
    }

    // scp-like syntax: a colon before any slash separates host from path.
    match (uri.find(':'), uri.find('/')) {
        (Some(colon), Some(slash)) if colon < slash => &uri[colon + 1..],
        (Some(colon), None) => &uri[colon + 1..],
        _ => uri,
    }
}

/// Parse the organization and repository name out of a git remote URI.
///
/// ```
/// use repodir::identifier::parse_remote_uri;
///
/// let id = parse_remote_uri("git@github.com:acme/sub-repo.git").unwrap();
/// assert_eq!(id.organization(), "acme");
/// assert_eq!(id.name(), "sub-repo");
/// ```
pub fn parse_remote_uri(uri: &str) -> std::result::Result<RepoId, UriError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(UriError::Empty);
    }

    let path = repository_path(uri)
        .strip_suffix(GIT_SUFFIX)
        .ok_or(UriError::MissingGitSuffix)?;

    let (parent, name) = match path.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    };

    if name.is_empty() || is_relative_segment(name) || !name.chars().all(is_name_char) {
        return Err(UriError::InvalidName(name.to_string()));
    }

    let organization = parent.rsplit('/').next().unwrap_or("");
    if organization.is_empty() {
        return Err(UriError::MissingOrganization);
    }
    if is_relative_segment(organization) || !organization.chars().all(is_organization_char) {
        return Err(UriError::InvalidOrganization(organization.to_string()));
    }

    Ok(RepoId::new(organization, name))
}

/// Parse a `newrepo` identifier of the form `org/repo` or `repo`.
///
/// When the organization is omitted `default_org` is used; if that is also
/// missing the error names `default_org_variable` so the user knows what to set.
pub fn parse_repo_id(
    input: &str,
    default_org: Option<&str>,
    default_org_variable: &'static str,
) -> Result<RepoId> {
    let invalid = |message: &str| Error::InvalidRepoId {
        input: input.to_string(),
        message: message.to_string(),
    };

    let parts: Vec<&str> = input.split('/').collect();
    let (organization, name) = match parts.as_slice() {
        [name] => {
            let organization = default_org
                .filter(|org| !org.is_empty())
                .ok_or(Error::MissingOrganization {
                    variable: default_org_variable,
                })?;
            (organization, *name)
        }
        [organization, name] => (*organization, *name),
        _ => return Err(invalid("repoId must be on the form: org/repo")),
    };

    if organization.is_empty() {
        return Err(invalid("the organization is empty"));
    }
    if name.is_empty() {
        return Err(invalid("the repository name is empty"));
    }
    if is_relative_segment(organization) || is_relative_segment(name) {
        return Err(invalid("'.' and '..' are not valid organization or repository names"));
    }

    Ok(RepoId::new(organization, name))
}
