//! # External Command Runner
//!
//! Every side effect that leaves the process (`git clone`, `git pull`,
//! `gh repo create`) is described as an [`Invocation`] and executed through
//! the [`CommandRunner`] trait. The binaries use [`SystemRunner`]; tests
//! substitute a recording mock so no real `git` or `gh` is ever started.
//!
//! Commands run synchronously and to completion. Standard output of the
//! child never reaches our own stdout, which is reserved for the resolved
//! path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// What to do with the child's output streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Drop stdout, pass stderr through to the user.
    DiscardStdout,
    /// Collect both streams and attach them to a failure.
    Capture,
}

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            output: OutputMode::DiscardStdout,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl fmt::Display for Invocation {
    /// Renders the command line, quoting arguments that contain whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Trait for running external commands - allows mocking in tests
pub trait CommandRunner {
    /// Runs the invocation to completion.
    ///
    /// Returns [`Error::CommandFailed`] on a non-zero exit and
    /// [`Error::CommandSpawn`] when the program could not be started.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// The default implementation of `CommandRunner`, which starts real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!(
            "Running '{}' in {}",
            invocation,
            invocation.cwd().display()
        );

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);

        let spawn_error = |source| Error::CommandSpawn {
            command: invocation.to_string(),
            source,
        };

        let (status, captured) = match invocation.output {
            OutputMode::DiscardStdout => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::null())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                (status, String::new())
            }
            OutputMode::Capture => {
                let output = command.stdin(Stdio::null()).output().map_err(spawn_error)?;
                let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
                captured.push_str(&String::from_utf8_lossy(&output.stderr));
                (output.status, captured)
            }
        };

        debug!("'{}' exited with {:?}", invocation, status.code());

        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
                output: captured,
            })
        }
    }
}
