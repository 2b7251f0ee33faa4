use serde::Deserialize;

use crate::config::error::ApplicationManagerConfigError;

/// ApplicationManagerConfig holds the process-wide settings the application managers are built with.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct ApplicationManagerConfig {
    /// Run kill commands through `sudo -u <tenant>`.
    #[serde(default = "default_sudo_enabled")]
    pub sudo_enabled: bool,

    /// kerberos re-authentication performed before talking to the cluster.
    #[serde(default)]
    pub kerberos: KerberosConfig,
}

impl Default for ApplicationManagerConfig {
    fn default() -> Self {
        Self {
            sudo_enabled: default_sudo_enabled(),
            kerberos: KerberosConfig::default(),
        }
    }
}

fn default_sudo_enabled() -> bool {
    true
}

impl ApplicationManagerConfig {
    pub fn validate(self) -> Result<Self, ApplicationManagerConfigError> {
        self.kerberos.validate()?;
        Ok(self)
    }
}

#[derive(Debug, Deserialize, Default, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct KerberosConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub krb5_conf_path: String,
    #[serde(default)]
    pub keytab_path: String,
    #[serde(default)]
    pub principal: String,
}

impl KerberosConfig {
    pub fn new(krb5_conf_path: &str, keytab_path: &str, principal: &str) -> Self {
        Self {
            enabled: true,
            krb5_conf_path: krb5_conf_path.to_string(),
            keytab_path: keytab_path.to_string(),
            principal: principal.to_string(),
        }
    }

    /// An enabled configuration needs every value to build the `kinit` call.
    fn validate(&self) -> Result<(), ApplicationManagerConfigError> {
        if !self.enabled {
            return Ok(());
        }
        [
            ("krb5_conf_path", &self.krb5_conf_path),
            ("keytab_path", &self.keytab_path),
            ("principal", &self.principal),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(key, _)| {
            Err(ApplicationManagerConfigError::MissingKerberosSetting(
                key.to_string(),
            ))
        })
    }
}
