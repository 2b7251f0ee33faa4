pub mod error;
pub mod impersonation;
pub mod processrunner;

use std::fmt::{Display, Formatter};
use std::process::ExitStatus;

pub use error::CommandError;
pub use impersonation::{ImpersonationError, SudoImpersonator, TenantImpersonator};
pub use processrunner::ProcessRunner;

/// Program plus arguments, kept as argv instead of a single string so nothing is re-split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
}

impl ShellCommand {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::default(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
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

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl Display for ShellCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        self.args.iter().try_for_each(|arg| write!(f, " {}", arg))
    }
}

/// Output of a command that exited successfully.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Trait that specifies the interface for blocking command execution
pub trait CommandRunner {
    /// Runs the command until it exits. A non-zero exit is an error.
    fn run(&self, cmd: &ShellCommand) -> Result<CommandOutput, CommandError>;
}
