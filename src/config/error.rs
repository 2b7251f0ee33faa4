use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationManagerConfigError {
    #[error("error loading config: `{0}`")]
    IOError(#[from] std::io::Error),

    #[error("`{0}`")]
    InvalidYamlConfiguration(#[from] serde_yaml::Error),

    #[error("kerberos is enabled but `{0}` is not set")]
    MissingKerberosSetting(String),
}
