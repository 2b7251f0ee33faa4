pub mod application_manager_config;
pub mod error;
pub mod loader;

pub use application_manager_config::{ApplicationManagerConfig, KerberosConfig};
