//! # clonerepo
//!
//! Binary entry point for `clonerepo`. Parses arguments, runs the command
//! against the real `git`, and prints the resolved path on success. All
//! logic lives in [`repodir::commands::clone`].

use std::process::ExitCode;

use clap::Parser;

use repodir::commands::{self, clone::CloneArgs};
use repodir::runner::SystemRunner;

fn main() -> ExitCode {
    let args = CloneArgs::parse();
    commands::init_logging(&args.log_level);
    commands::finish(commands::clone::execute(args, &SystemRunner))
}
