use std::sync::Arc;
use std::thread;

use application_manager::application_manager::{
    ApplicationManagerContext, ApplicationManagerRegistry, RegistryError,
};
use application_manager::config::loader::load_from_str;
use application_manager::resource::ResourceManagerType;

#[test]
fn registry_is_shared_between_task_threads() {
    let config = load_from_str("sudo_enabled: false").unwrap();
    let registry = Arc::new(ApplicationManagerRegistry::try_new(&config).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .get(ResourceManagerType::Yarn)
                    .map(|manager| manager.resource_manager_type())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(Ok(ResourceManagerType::Yarn), handle.join().unwrap());
    }
}

#[test]
fn empty_registry_cannot_kill() {
    let registry = ApplicationManagerRegistry::new();
    let context =
        ApplicationManagerContext::try_new("/tmp/exec", "tenant_a", ["application_1_0001"])
            .unwrap();

    let result = registry
        .get(ResourceManagerType::Yarn)
        .map(|manager| manager.kill_application(&context));

    assert_eq!(
        Some(RegistryError::NotRegistered(ResourceManagerType::Yarn)),
        result.err()
    );
}
