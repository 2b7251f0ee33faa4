use serde::{Deserialize, Serialize};

use super::ResourceType;

/// Upload session record as persisted by the resource center.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub session_id: String,
    pub pid: i32,
    pub name: String,
    pub description: String,
    pub size: Option<i64>,
    pub current_dir: String,
    pub splits_path: String,
    pub tenant_code: String,
    pub type_code: i32,
}

impl UploadFile {
    /// Resolves `type_code`. Unknown codes yield `None`.
    pub fn resource_type(&self) -> Option<ResourceType> {
        ResourceType::get_by_code(self.type_code)
    }
}
