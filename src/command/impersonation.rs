use nix::unistd::User;
use thiserror::Error;
use tracing::debug;

use super::ShellCommand;

const SUDO: &str = "sudo";

#[derive(Error, Debug)]
pub enum ImpersonationError {
    #[error("tenant `{0}` is not an OS user on this host")]
    UnknownTenant(String),

    #[error("looking up tenant `{0}`: {1}")]
    LookupError(String, #[source] nix::Error),
}

/// Rewrites a command so that it runs under the OS identity of a tenant.
pub trait TenantImpersonator {
    fn impersonate(&self, tenant: &str, cmd: ShellCommand)
        -> Result<ShellCommand, ImpersonationError>;
}

/// Wraps commands with `sudo -E -u <tenant>` when enabled.
#[derive(Debug, Clone, Copy)]
pub struct SudoImpersonator {
    enabled: bool,
}

impl SudoImpersonator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl TenantImpersonator for SudoImpersonator {
    fn impersonate(
        &self,
        tenant: &str,
        cmd: ShellCommand,
    ) -> Result<ShellCommand, ImpersonationError> {
        if !self.enabled || tenant.is_empty() {
            return Ok(cmd);
        }

        User::from_name(tenant)
            .map_err(|e| ImpersonationError::LookupError(tenant.to_string(), e))?
            .ok_or_else(|| ImpersonationError::UnknownTenant(tenant.to_string()))?;

        debug!(tenant, "running command as tenant");
        Ok(ShellCommand::new(SUDO)
            .args(["-E", "-u", tenant])
            .arg(cmd.program())
            .args(cmd.get_args().iter().cloned()))
    }
}
