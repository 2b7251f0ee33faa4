use super::utils::{validate_path, FsError};
use super::LocalFile;
use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("error creating file: {0}")]
    ErrorCreatingFile(#[from] io::Error),

    #[error("invalid path: {0}")]
    InvalidPath(#[from] FsError),
}

pub trait FileWriter {
    /// Creates `path`, failing if it already exists, and writes `content` into it.
    fn write(&self, path: &Path, content: String, permissions: Permissions)
        -> Result<(), WriteError>;
}

impl FileWriter for LocalFile {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn write(
        &self,
        path: &Path,
        content: String,
        permissions: Permissions,
    ) -> Result<(), WriteError> {
        validate_path(path)?;

        let mut file_options = fs::OpenOptions::new();
        file_options.write(true).create_new(true);

        #[cfg(target_family = "unix")]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            file_options.mode(permissions.mode());
        }

        let mut file = file_options.open(path)?;

        // the file is ours from here on, do not leave a partial one behind
        let written = file
            .set_permissions(permissions)
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.sync_all());
        if let Err(e) = written {
            drop(file);
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("could not remove partially written file: {}", remove_err);
            }
            return Err(WriteError::ErrorCreatingFile(e));
        }
        Ok(())
    }
}
