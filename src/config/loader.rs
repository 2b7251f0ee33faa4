use crate::config::application_manager_config::ApplicationManagerConfig;
use crate::config::error::ApplicationManagerConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait ApplicationManagerConfigLoader {
    fn load_config(&self) -> Result<ApplicationManagerConfig, ApplicationManagerConfigError>;
}

pub struct ApplicationManagerConfigLoaderFile {
    file_path: PathBuf,
}

impl ApplicationManagerConfigLoader for ApplicationManagerConfigLoaderFile {
    fn load_config(&self) -> Result<ApplicationManagerConfig, ApplicationManagerConfigError> {
        debug!("loading config from {}", self.file_path.display());
        let f = std::fs::File::open(&self.file_path)?;
        let config: ApplicationManagerConfig = serde_yaml::from_reader(f)?;
        config.validate()
    }
}

impl ApplicationManagerConfigLoaderFile {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
        }
    }
}

/// Parses and validates a YAML document.
pub fn load_from_str(
    content: &str,
) -> Result<ApplicationManagerConfig, ApplicationManagerConfigError> {
    let config: ApplicationManagerConfig = serde_yaml::from_str(content)?;
    config.validate()
}
