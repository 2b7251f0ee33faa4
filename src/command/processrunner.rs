use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use super::{CommandError, CommandOutput, CommandRunner, ShellCommand};

/// Runs commands as child processes of the worker, waiting for them to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(program = cmd.program()))]
    fn run(&self, cmd: &ShellCommand) -> Result<CommandOutput, CommandError> {
        let output = Command::new(cmd.program())
            .args(cmd.get_args())
            .stdin(Stdio::null())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(status = %output.status, "process exited");

        if !output.status.success() {
            return Err(CommandError::ProcessError {
                status: output.status,
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(CommandOutput {
            status: output.status,
            stdout,
            stderr,
        })
    }
}
