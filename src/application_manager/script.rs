use std::path::{Path, PathBuf};

use tracing::warn;

use crate::fs::file_deleter::FileDeleter;
use crate::fs::utils::get_script_permissions;
use crate::fs::writer_file::{FileWriter, WriteError};

/// Executable script that only lives as long as this value.
///
/// The file is removed when the value is dropped, whatever the way the owning scope is left.
pub struct KillScript<'a, F>
where
    F: FileDeleter,
{
    path: PathBuf,
    fs: &'a F,
}

impl<'a, F> KillScript<'a, F>
where
    F: FileWriter + FileDeleter,
{
    /// Writes `content` into a new executable file at `path`.
    pub fn create(fs: &'a F, path: PathBuf, content: String) -> Result<Self, WriteError> {
        fs.write(&path, content, get_script_permissions())?;
        Ok(Self { path, fs })
    }
}

impl<F> KillScript<'_, F>
where
    F: FileDeleter,
{
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F> Drop for KillScript<'_, F>
where
    F: FileDeleter,
{
    fn drop(&mut self) {
        if let Err(e) = self.fs.delete(&self.path) {
            warn!(path = %self.path.display(), "could not delete kill script: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockLocalFile;
    use crate::fs::LocalFile;
    use mockall::predicate;
    use std::io;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use tracing_test::traced_test;

    #[test]
    fn script_exists_while_in_scope() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("app_1.kill");

        {
            let script = KillScript::create(&LocalFile, path.clone(), "#!/bin/sh\n".into())
                .unwrap();
            assert!(script.path().exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn script_is_deleted_when_unwinding() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("app_1.kill");

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _script =
                KillScript::create(&LocalFile, path.clone(), "#!/bin/sh\n".into()).unwrap();
            panic!("task thread died");
        }));

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_does_not_delete() {
        let mut fs = MockLocalFile::default();
        fs.expect_write().once().returning(|_, _, _| {
            Err(WriteError::ErrorCreatingFile(io::Error::from(
                io::ErrorKind::PermissionDenied,
            )))
        });
        fs.expect_delete().never();

        let result = KillScript::create(&fs, PathBuf::from("/tmp/exec/app_1.kill"), "".into());

        assert!(result.is_err());
    }

    #[traced_test]
    #[test]
    fn delete_failure_is_logged() {
        let mut fs = MockLocalFile::default();
        fs.expect_write().once().returning(|_, _, _| Ok(()));
        fs.expect_delete()
            .with(predicate::eq(PathBuf::from("/tmp/exec/app_1.kill")))
            .once()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let script =
            KillScript::create(&fs, PathBuf::from("/tmp/exec/app_1.kill"), "".into()).unwrap();
        drop(script);

        assert!(logs_contain("could not delete kill script"));
    }
}
