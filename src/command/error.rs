use std::{fmt::Debug, process::ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("process exited with error: `{status}`: {stderr}")]
    ProcessError { status: ExitStatus, stderr: String },

    #[error("io error: `{0}`")]
    IOError(#[from] std::io::Error),
}
