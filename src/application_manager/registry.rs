use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::RegistryError;
use super::yarn;
use super::ApplicationManager;
use crate::config::ApplicationManagerConfig;
use crate::resource::ResourceManagerType;

/// Builds the application manager of one backend from the process configuration.
pub type ApplicationManagerBuilder = fn(&ApplicationManagerConfig) -> Arc<dyn ApplicationManager>;

/// Backends supported by the worker, registered at startup.
pub const BUILT_IN_MANAGERS: &[ApplicationManagerBuilder] = &[yarn::build];

/// ApplicationManagerRegistry resolves a [`ResourceManagerType`] to the manager able to
/// terminate its applications.
///
/// It is filled once at startup and only read afterwards, so it can be shared between task
/// threads behind an `Arc` without locking.
#[derive(Default)]
pub struct ApplicationManagerRegistry(HashMap<ResourceManagerType, Arc<dyn ApplicationManager>>);

impl ApplicationManagerRegistry {
    pub fn new() -> Self {
        ApplicationManagerRegistry::default()
    }

    /// Registry holding every built-in manager.
    pub fn try_new(config: &ApplicationManagerConfig) -> Result<Self, RegistryError> {
        Self::with_builders(config, BUILT_IN_MANAGERS)
    }

    pub fn with_builders(
        config: &ApplicationManagerConfig,
        builders: &[ApplicationManagerBuilder],
    ) -> Result<Self, RegistryError> {
        builders
            .iter()
            .try_fold(Self::new(), |mut registry, build| {
                registry.register(build(config))?;
                Ok(registry)
            })
    }

    /// Fails if a manager for the same resource manager type was already registered.
    pub fn register(&mut self, manager: Arc<dyn ApplicationManager>) -> Result<(), RegistryError> {
        let resource_manager_type = manager.resource_manager_type();
        if self.0.contains_key(&resource_manager_type) {
            return Err(RegistryError::AlreadyRegistered(resource_manager_type));
        }
        debug!(%resource_manager_type, "registering application manager");
        self.0.insert(resource_manager_type, manager);
        Ok(())
    }

    pub fn get(
        &self,
        resource_manager_type: ResourceManagerType,
    ) -> Result<Arc<dyn ApplicationManager>, RegistryError> {
        self.0
            .get(&resource_manager_type)
            .cloned()
            .ok_or(RegistryError::NotRegistered(resource_manager_type))
    }

    pub fn resource_manager_types(&self) -> impl Iterator<Item = &ResourceManagerType> {
        self.0.keys()
    }
}
