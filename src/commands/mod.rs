//! # CLI Command Implementations
//!
//! This module contains the implementation of the two command-line tools
//! shipped by this crate. Each tool is defined in its own file:
//!
//! - [`clone`]: `clonerepo`, clone or update a repository by URI.
//! - [`create`]: `newrepo`, create a remote repository and its local directory.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`. Configuration values are read from the
//!   environment through clap's `env` support.
//! - An `execute` function that takes the parsed `Args` and a
//!   [`CommandRunner`](crate::runner::CommandRunner), and returns the
//!   resolved local path.
//!
//! The binaries are thin wrappers: parse, [`init_logging`], `execute`, and
//! [`finish`] to print the path or the error and pick the exit code.

pub mod clone;
pub mod create;

use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::Error;

/// Initialize `env_logger` on stderr.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running inside tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Report the outcome of a command and produce the process exit code.
///
/// On success the resolved path is the only thing written to stdout, so the
/// tools can be used as `cd "$(clonerepo <uri>)"`.
pub fn finish(result: anyhow::Result<PathBuf>) -> ExitCode {
    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit status for a failed command: the library error's own code, or 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1)
}
