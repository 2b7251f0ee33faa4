use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::application_manager::context::{ApplicationManagerContext, ContextError};
use crate::config::error::ApplicationManagerConfigError;
use crate::config::loader::{ApplicationManagerConfigLoader, ApplicationManagerConfigLoaderFile};
use crate::config::ApplicationManagerConfig;
use crate::defaults::DEFAULT_CONFIG_PATH;
use crate::resource::ResourceManagerType;

/// Kills applications previously submitted to a cluster resource manager.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    /// Configuration file. When not set, the default path is used if it exists.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "yarn")]
    resource_manager: ResourceManagerType,

    /// Directory the kill script is written to.
    #[arg(long, required_unless_present = "print_debug_info")]
    execute_path: Option<PathBuf>,

    /// OS user the kill runs as.
    #[arg(long, required_unless_present = "print_debug_info")]
    tenant: Option<String>,

    /// Ids of the applications to kill.
    #[arg(required_unless_present = "print_debug_info")]
    app_ids: Vec<String>,

    #[arg(long)]
    print_debug_info: bool,
}

impl Cli {
    /// Parses command line arguments
    pub fn init_cli() -> Self {
        Self::parse()
    }

    pub fn print_debug_info(&self) -> bool {
        self.print_debug_info
    }

    pub fn resource_manager(&self) -> ResourceManagerType {
        self.resource_manager
    }

    pub fn context(&self) -> Result<ApplicationManagerContext, ContextError> {
        ApplicationManagerContext::try_new(
            self.execute_path.clone().unwrap_or_default(),
            self.tenant.clone().unwrap_or_default(),
            self.app_ids.clone(),
        )
    }

    /// An explicit config path must exist; a missing default one means default settings.
    pub fn load_config(&self) -> Result<ApplicationManagerConfig, ApplicationManagerConfigError> {
        match &self.config {
            Some(path) => ApplicationManagerConfigLoaderFile::new(path).load_config(),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                ApplicationManagerConfigLoaderFile::new(Path::new(DEFAULT_CONFIG_PATH))
                    .load_config()
            }
            None => {
                info!("no config found at {}, using defaults", DEFAULT_CONFIG_PATH);
                Ok(ApplicationManagerConfig::default())
            }
        }
    }
}
