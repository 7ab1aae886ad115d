//! # newrepo
//!
//! Binary entry point for `newrepo`. Parses arguments, runs the command
//! against the real `gh`, and prints the resolved path on success. All logic
//! lives in [`repodir::commands::create`].

use std::process::ExitCode;

use clap::Parser;

use repodir::commands::{self, create::NewArgs};
use repodir::runner::SystemRunner;

fn main() -> ExitCode {
    let args = NewArgs::parse();
    commands::init_logging(&args.log_level);
    commands::finish(commands::create::execute(args, &SystemRunner))
}
