use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info};
use ulid::Ulid;

use super::error::{ApplicationManagerError, DispatchError};
use super::script::KillScript;
use super::{ApplicationManager, ApplicationManagerContext};
use crate::command::{
    CommandRunner, ProcessRunner, ShellCommand, SudoImpersonator, TenantImpersonator,
};
use crate::config::{ApplicationManagerConfig, KerberosConfig};
use crate::defaults::{
    APP_ID_FILE_SEPARATOR, APP_ID_SEPARATOR, KILL_SCRIPT_EXTENSION, SH, YARN_KILL_COMMAND,
};
use crate::fs::file_deleter::FileDeleter;
use crate::fs::writer_file::FileWriter;
use crate::fs::LocalFile;
use crate::resource::ResourceManagerType;

/// Builder registered in the [`ApplicationManagerRegistry`](super::ApplicationManagerRegistry).
pub fn build(config: &ApplicationManagerConfig) -> Arc<dyn ApplicationManager> {
    Arc::new(YarnApplicationManager::new(config))
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Kills YARN applications by running `yarn application -kill` as the tenant.
///
/// The command is written to a temporary script in the execution directory, optionally
/// preceded by a kerberos re-authentication, and the script is removed once the call returns.
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Build
///     Build --> Write
///     Write --> Execute
///     Write --> Cleanup: write error
///     Execute --> Cleanup
///     Cleanup --> [*]
/// ```
pub struct YarnApplicationManager<R = ProcessRunner, I = SudoImpersonator, F = LocalFile>
where
    R: CommandRunner,
    I: TenantImpersonator,
    F: FileWriter + FileDeleter,
{
    kerberos: KerberosConfig,
    runner: R,
    impersonator: I,
    fs: F,
}

impl YarnApplicationManager {
    pub fn new(config: &ApplicationManagerConfig) -> Self {
        Self::with_parts(
            config.kerberos.clone(),
            ProcessRunner,
            SudoImpersonator::new(config.sudo_enabled),
            LocalFile,
        )
    }
}

impl<R, I, F> YarnApplicationManager<R, I, F>
where
    R: CommandRunner,
    I: TenantImpersonator,
    F: FileWriter + FileDeleter,
{
    pub fn with_parts(kerberos: KerberosConfig, runner: R, impersonator: I, fs: F) -> Self {
        Self {
            kerberos,
            runner,
            impersonator,
            fs,
        }
    }

    fn dispatch(&self, context: &ApplicationManagerContext) -> Result<(), DispatchError> {
        let cmd = format!(
            "{}{}",
            kerberos_init_command(&self.kerberos),
            kill_command(context.app_ids())
        );
        let path = kill_script_path(
            context.execute_path(),
            context.app_ids(),
            &Ulid::new().to_string(),
        );

        let script = KillScript::create(&self.fs, path, script_content(&cmd))?;

        let run_cmd = self.impersonator.impersonate(
            context.tenant_code(),
            ShellCommand::new(SH).arg(script.path().display().to_string()),
        )?;
        info!("kill cmd: {}", run_cmd);
        let output = self.runner.run(&run_cmd)?;
        debug!(stdout = %output.stdout.trim_end(), "kill script finished");

        Ok(())
    }
}

impl<R, I, F> ApplicationManager for YarnApplicationManager<R, I, F>
where
    R: CommandRunner + Send + Sync,
    I: TenantImpersonator + Send + Sync,
    F: FileWriter + FileDeleter + Send + Sync,
{
    fn resource_manager_type(&self) -> ResourceManagerType {
        ResourceManagerType::Yarn
    }

    fn kill_application(
        &self,
        context: &ApplicationManagerContext,
    ) -> Result<bool, ApplicationManagerError> {
        self.dispatch(context).map_err(|source| {
            error!("Kill yarn application {:?} failed: {}", context.app_ids(), source);
            ApplicationManagerError::Dispatch {
                app_ids: context.app_ids().to_vec(),
                source,
            }
        })?;
        Ok(true)
    }
}

/// `yarn application -kill` followed by every id, in the given order.
pub fn kill_command(app_ids: &[String]) -> String {
    format!("{} {}", YARN_KILL_COMMAND, app_ids.join(APP_ID_SEPARATOR))
}

/// Lines that refresh the kerberos ticket before the kill. A failed `kinit` does not stop the
/// script; the kill itself will report the authentication problem.
pub fn kerberos_init_command(kerberos: &KerberosConfig) -> String {
    if !kerberos.enabled {
        return String::new();
    }
    let init = format!(
        "export KRB5_CONFIG={}\n\nkinit -k -t {} {} || true\n\n",
        kerberos.krb5_conf_path, kerberos.keytab_path, kerberos.principal
    );
    debug!("kerberos init command: {}", init);
    init
}

pub fn script_content(cmd: &str) -> String {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str("BASEDIR=$(cd `dirname $0`; pwd)\n");
    script.push_str("cd $BASEDIR\n");
    script.push_str("\n\n");
    script.push_str(cmd);
    script.push('\n');
    script
}

/// `<execute_path>/<ids joined by '_'>.<token>.kill`.
///
/// The token keeps two requests for the same ids from sharing a script.
pub fn kill_script_path(execute_path: &Path, app_ids: &[String], token: &str) -> PathBuf {
    execute_path.join(format!(
        "{}.{}.{}",
        app_ids.join(APP_ID_FILE_SEPARATOR),
        token,
        KILL_SCRIPT_EXTENSION
    ))
}
