use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContextError {
    #[error("execute path cannot be empty")]
    EmptyExecutePath,
    #[error("tenant code cannot be empty")]
    EmptyTenantCode,
    #[error("at least one application id is required")]
    NoApplicationIds,
    #[error("application id `{0}` allows only a-zA-Z0-9_-")]
    InvalidApplicationId(String),
}

/// Everything a single termination request needs. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationManagerContext {
    execute_path: PathBuf,
    tenant_code: String,
    app_ids: Vec<String>,
}

impl ApplicationManagerContext {
    /// Application ids end up in a shell script and a file name, so they are restricted to
    /// the characters resource managers use for them.
    pub fn try_new<P, T, I, S>(
        execute_path: P,
        tenant_code: T,
        app_ids: I,
    ) -> Result<Self, ContextError>
    where
        P: Into<PathBuf>,
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let execute_path = execute_path.into();
        if execute_path.as_os_str().is_empty() {
            return Err(ContextError::EmptyExecutePath);
        }

        let tenant_code = tenant_code.into();
        if tenant_code.trim().is_empty() {
            return Err(ContextError::EmptyTenantCode);
        }

        let app_ids: Vec<String> = app_ids.into_iter().map(Into::into).collect();
        if app_ids.is_empty() {
            return Err(ContextError::NoApplicationIds);
        }
        if let Some(invalid) = app_ids.iter().find(|id| !is_valid_app_id(id)) {
            return Err(ContextError::InvalidApplicationId(invalid.clone()));
        }

        Ok(Self {
            execute_path,
            tenant_code,
            app_ids,
        })
    }

    pub fn execute_path(&self) -> &Path {
        &self.execute_path
    }

    pub fn tenant_code(&self) -> &str {
        &self.tenant_code
    }

    pub fn app_ids(&self) -> &[String] {
        &self.app_ids
    }
}

fn is_valid_app_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|x| x.is_ascii_alphanumeric() || x.eq(&'_') || x.eq(&'-'))
}
