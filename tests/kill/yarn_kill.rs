use std::sync::Arc;
use std::thread;

use application_manager::application_manager::{
    ApplicationManager, ApplicationManagerContext, ApplicationManagerError,
    YarnApplicationManager,
};
use application_manager::command::{
    CommandError, CommandOutput, CommandRunner, ProcessRunner, ShellCommand, SudoImpersonator,
};
use application_manager::config::KerberosConfig;
use application_manager::fs::LocalFile;

use crate::common::{files_in, FakeYarn};

/// Runs commands with a `PATH` where `yarn` is the fake one.
struct FakeYarnRunner {
    path_env: String,
}

impl CommandRunner for FakeYarnRunner {
    fn run(&self, cmd: &ShellCommand) -> Result<CommandOutput, CommandError> {
        let with_path = ShellCommand::new("env")
            .arg(format!("PATH={}", self.path_env))
            .arg(cmd.program())
            .args(cmd.get_args().iter().cloned());
        ProcessRunner.run(&with_path)
    }
}

fn manager(
    yarn: &FakeYarn,
    kerberos: KerberosConfig,
) -> YarnApplicationManager<FakeYarnRunner, SudoImpersonator, LocalFile> {
    YarnApplicationManager::with_parts(
        kerberos,
        FakeYarnRunner {
            path_env: yarn.path_env(),
        },
        SudoImpersonator::new(false),
        LocalFile,
    )
}

#[test]
fn kill_runs_yarn_with_every_application_id() {
    let yarn = FakeYarn::new(0);
    let execute_path = tempfile::tempdir().unwrap();
    let context = ApplicationManagerContext::try_new(
        execute_path.path(),
        "tenant_a",
        ["app_001", "app_002"],
    )
    .unwrap();

    let killed = manager(&yarn, KerberosConfig::default())
        .kill_application(&context)
        .unwrap();

    assert!(killed);
    assert_eq!(
        vec!["application -kill app_001 app_002".to_string()],
        yarn.invocations()
    );
    assert!(files_in(execute_path.path()).is_empty());
}

#[test]
fn failed_kinit_does_not_stop_the_kill() {
    let yarn = FakeYarn::new(0);
    let execute_path = tempfile::tempdir().unwrap();
    let context =
        ApplicationManagerContext::try_new(execute_path.path(), "tenant_a", ["app_001"]).unwrap();
    // the keytab does not exist, so kinit fails or is not even installed
    let kerberos = KerberosConfig::new(
        "/nonexistent/krb5.conf",
        "/nonexistent/worker.keytab",
        "worker@EXAMPLE.COM",
    );

    let killed = manager(&yarn, kerberos).kill_application(&context).unwrap();

    assert!(killed);
    assert_eq!(
        vec!["application -kill app_001".to_string()],
        yarn.invocations()
    );
}

#[test]
fn yarn_failure_is_reported_and_script_removed() {
    let yarn = FakeYarn::new(1);
    let execute_path = tempfile::tempdir().unwrap();
    let context =
        ApplicationManagerContext::try_new(execute_path.path(), "tenant_a", ["app_001"]).unwrap();

    let result = manager(&yarn, KerberosConfig::default()).kill_application(&context);

    match result {
        Err(ApplicationManagerError::Dispatch { app_ids, source }) => {
            assert_eq!(vec!["app_001".to_string()], app_ids);
            assert!(source.to_string().contains("exit status: 1"));
        }
        other => panic!("expected a dispatch error, got {:?}", other),
    }
    assert!(files_in(execute_path.path()).is_empty());
}

#[test]
fn concurrent_kills_of_the_same_ids_do_not_collide() {
    let yarn = FakeYarn::new(0);
    let execute_path = tempfile::tempdir().unwrap();
    let manager: Arc<dyn ApplicationManager> = Arc::new(manager(&yarn, KerberosConfig::default()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = manager.clone();
            let context = ApplicationManagerContext::try_new(
                execute_path.path(),
                "tenant_a",
                ["app_001", "app_002"],
            )
            .unwrap();
            thread::spawn(move || manager.kill_application(&context))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().unwrap());
    }
    assert_eq!(8, yarn.invocations().len());
    assert!(files_in(execute_path.path()).is_empty());
}
