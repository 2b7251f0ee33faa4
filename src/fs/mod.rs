pub mod file_deleter;
pub mod utils;
pub mod writer_file;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFile;
