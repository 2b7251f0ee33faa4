//! Taxonomies and records shared between the task engine and the application managers.

pub mod resource_manager_type;
pub mod resource_type;
pub mod upload_file;

pub use resource_manager_type::ResourceManagerType;
pub use resource_type::ResourceType;
pub use upload_file::UploadFile;
