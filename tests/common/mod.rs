#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Directory with a `yarn` stand-in that appends its arguments to `yarn.log`
/// and exits with the given code.
pub struct FakeYarn {
    dir: tempfile::TempDir,
}

impl FakeYarn {
    pub fn new(exit_code: i32) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("yarn.log");
        let bin = dir.path().join("yarn");
        fs::write(
            &bin,
            format!(
                "#!/bin/sh\necho \"$@\" >> {}\nexit {}\n",
                log.display(),
                exit_code
            ),
        )
        .unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    /// `PATH` value that resolves `yarn` to the fake one first.
    pub fn path_env(&self) -> String {
        format!(
            "{}:{}",
            self.dir.path().display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }

    /// One line per invocation.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("yarn.log")
    }
}

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}
