use thiserror::Error;

use crate::command::{CommandError, ImpersonationError};
use crate::fs::writer_file::WriteError;
use crate::resource::ResourceManagerType;

#[derive(Error, Debug)]
pub enum ApplicationManagerError {
    #[error("kill application {app_ids:?} failed: {source}")]
    Dispatch {
        app_ids: Vec<String>,
        #[source]
        source: DispatchError,
    },
}

/// Local cause of a failed termination request.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("writing kill script: {0}")]
    Write(#[from] WriteError),

    #[error("switching to tenant: {0}")]
    Impersonation(#[from] ImpersonationError),

    #[error("running kill script: {0}")]
    Command(#[from] CommandError),
}

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("no application manager registered for resource manager `{0}`")]
    NotRegistered(ResourceManagerType),

    #[error("resource manager `{0}` already has an application manager registered")]
    AlreadyRegistered(ResourceManagerType),
}
