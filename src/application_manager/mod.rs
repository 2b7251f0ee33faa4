//! Termination of applications running on an external cluster resource manager.
//!
//! Every supported backend provides an [`ApplicationManager`]; callers resolve the one they need
//! through the [`ApplicationManagerRegistry`] using the application's [`ResourceManagerType`].

pub mod context;
pub mod error;
pub mod registry;
pub mod script;
pub mod yarn;

pub use context::ApplicationManagerContext;
pub use error::{ApplicationManagerError, RegistryError};
pub use registry::ApplicationManagerRegistry;
pub use yarn::YarnApplicationManager;

use crate::resource::ResourceManagerType;

pub trait ApplicationManager: Send + Sync {
    /// Backend this manager terminates applications on.
    fn resource_manager_type(&self) -> ResourceManagerType;

    /// Issues the termination of every application in the context.
    ///
    /// `Ok(true)` only means the request was dispatched without local errors; the cluster may
    /// still need some time to reclaim the applications. An error means the termination is not
    /// confirmed, not that the applications are still running.
    fn kill_application(
        &self,
        context: &ApplicationManagerContext,
    ) -> Result<bool, ApplicationManagerError>;
}
