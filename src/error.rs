//! # Error Handling
//!
//! This module defines the centralized error type for the `repodir` library.
//! It uses `thiserror` to describe every failure the two tools can surface,
//! each variant carrying enough context to print a self-contained diagnostic.
//!
//! The variants fall into four groups:
//!
//! - **Configuration**: a required environment variable is unset or empty.
//! - **Parse**: a repository URI or `org/repo` identifier is malformed.
//! - **Precondition**: the target directory for a new repository already exists.
//! - **External command**: `git` or `gh` could not be started or exited non-zero.
//!
//! [`Error::exit_code`] maps each variant to the process exit status. Only
//! external command failures carry their own status; everything else exits 1.

use std::path::PathBuf;

use thiserror::Error;

use crate::identifier::UriError;

/// Example URIs shown whenever a repository URI cannot be parsed.
pub const URI_EXAMPLES: &[&str] = &[
    "git@github.com:someone/some-repo.git",
    "https://github.com/someone/some-repo.git",
];

fn uri_examples() -> String {
    let mut out = String::from("\n\nExamples of a correct URI:");
    for example in URI_EXAMPLES {
        out.push_str("\n  ");
        out.push_str(example);
    }
    out
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!("\n  hint: {}", h))
        .unwrap_or_default()
}

/// Main error type for repodir operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration value was not provided.
    #[error("Missing environment variable {variable}{}", format_hint(hint))]
    MissingConfig {
        variable: &'static str,
        /// What the variable should contain
        hint: Option<String>,
    },

    /// A repository URI could not be split into organization and name.
    #[error("Not a valid repository URI: {uri} ({reason}){}", uri_examples())]
    InvalidUri { uri: String, reason: UriError },

    /// A repository identifier given to `newrepo` is malformed.
    #[error("Invalid repository identifier '{input}': {message}")]
    InvalidRepoId { input: String, message: String },

    /// No organization was given and no default is configured.
    #[error(
        "You didn't provide an organization, and you haven't set the environment variable {variable}, \
         so it's impossible to figure out which organization to use."
    )]
    MissingOrganization { variable: &'static str },

    /// Refusing to create a repository over an existing directory.
    #[error("Directory already exists: {}", path.display())]
    DirectoryExists { path: PathBuf },

    /// An external command could not be started.
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error(
        "Command '{command}' failed ({}){}",
        code.map(|c| format!("exit code {}", c)).unwrap_or_else(|| "terminated by signal".to_string()),
        if output.trim().is_empty() { String::new() } else { format!(":\n{}", output.trim_end()) }
    )]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Captured stdout and stderr, empty when the streams were not captured
        output: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit status this error should terminate with.
    ///
    /// A failing external command propagates its own status when it is a
    /// valid non-zero exit code; every other failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
